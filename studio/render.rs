/// Central template renderer for the timetable studio.
///
/// The studio uses a single HTML template (`studio/assets/studio.html`) with
/// placeholder tokens like `{{TOKEN}}`. The template is compiled into the
/// binary; `render_page` resolves the global tokens and hands the rest to a
/// closure. Tokens the closure leaves alone are blanked so that raw
/// `{{TOKEN}}` strings never reach the browser.

const TEMPLATE: &str = include_str!("assets/studio.html");

/// Renders the full studio page.
///
/// # Arguments
/// - `pending` — whether a timetable request is in flight (disables Generate)
/// - `fill`    — closure that fills page-specific placeholders
pub fn render_page<F>(pending: bool, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let mut html = TEMPLATE.to_owned();

    html = html.replace("{{PENDING}}", if pending { "true" } else { "false" });
    html = html.replace("{{GENERATE_DISABLED}}", if pending { "disabled" } else { "" });

    html = fill(html);

    blank_remaining(html)
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't already substituted with an
/// empty string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfilled_tokens_are_blanked() {
        let page = render_page(true, |t| t.replace("{{FLASH}}", "<p>hi</p>"));
        assert!(page.contains("<p>hi</p>"));
        assert!(!page.contains("{{"));
    }
}
