use crate::projection::projector::Projection;

/// Escapes text for use inside HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
}

/// Renders the projection as an HTML `<table>`.
///
/// Header row: an empty corner cell followed by one `<th>` per day. Each
/// body row starts with its label; each session in a cell is its own
/// `<div class="session">`.
pub fn render_html_table(projection: &Projection) -> String {
    let mut html = String::from("<table class=\"timetable\">\n<thead><tr><th></th>");
    for day in &projection.header {
        html.push_str(&format!("<th>{}</th>", html_escape(day)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &projection.rows {
        html.push_str(&format!("<tr><th scope=\"row\">{}</th>", html_escape(&row.label)));
        for cell in &row.cells {
            html.push_str("<td>");
            for session in cell {
                html.push_str(&format!("<div class=\"session\">{}</div>", html_escape(session)));
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}
