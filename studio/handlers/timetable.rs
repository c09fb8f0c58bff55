use std::io::Cursor;
use tiny_http::{Request, Response};

use timetable_studio::projection::html_escape;
use timetable_studio::{
    encode, project, render_html_table, FieldKind, FormField, RawConfig, SubjectTeacher, SubmissionState,
};

use crate::render::render_page;
use crate::routes::{html_response, read_body, redirect};
use crate::state::{lock, FlashKind, FlashMessage, SharedService, SharedState};
use crate::util::form::{form_get, parse_form};

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = lock(&state);
    let flash   = st.take_flash();
    let form    = st.form.clone();
    let pending = st.submission.is_pending();

    // Project over the days currently in the form, not the ones the grid
    // was requested with.
    let days = encode(&form).days;
    let (status_html, error_html, table_html) = match st.submission.state() {
        SubmissionState::Idle => (
            "<p class=\"hint\">Fill in the form and press Generate Timetable.</p>".to_owned(),
            String::new(),
            String::new(),
        ),
        SubmissionState::Pending { .. } => (
            "<p class=\"hint\">Generating timetable&hellip;</p>".to_owned(),
            String::new(),
            String::new(),
        ),
        SubmissionState::Succeeded { grid, .. } => {
            let projection = project(grid, days.as_slice());
            let mut status = String::from("<h2>Generated Timetable</h2>");
            if projection.is_empty() {
                status.push_str("<p class=\"hint\">The timetable has no sessions on the configured days.</p>");
            }
            if grid.skipped() > 0 {
                status.push_str(&format!(
                    "<p class=\"hint\">{} malformed entries in the response were left out.</p>",
                    grid.skipped()
                ));
            }
            status.push_str(
                "<p class=\"hint\"><a href=\"/timetable/export\">Download JSON</a> &middot; \
                 <a href=\"/timetable/request\">View request</a></p>",
            );
            (status, String::new(), render_html_table(&projection))
        }
        SubmissionState::Failed { message, .. } => (
            String::new(),
            format!("<p class=\"error\">{}</p>", html_escape(message)),
            String::new(),
        ),
    };
    drop(st);

    let flash_html  = render_flash_html(flash.as_ref());
    let fields_html = build_form_fields(&form);
    let lab_html    = build_lab_rows(&form);

    html_response(render_page(pending, |tmpl| {
        tmpl
            .replace("{{FLASH}}", &flash_html)
            .replace("{{FORM_FIELDS}}", &fields_html)
            .replace("{{LAB_ROWS}}", &lab_html)
            .replace("{{STATUS}}", &status_html)
            .replace("{{ERROR}}", &error_html)
            .replace("{{TIMETABLE}}", &table_html)
    }))
}

// ---------------------------------------------------------------------------
// POST /form/save
// ---------------------------------------------------------------------------

pub fn handle_save(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let body  = read_body(request);
    let pairs = parse_form(&body);

    let mut st = lock(&state);
    let next = apply_form(&st.form, &pairs);
    st.form = next;
    if form_get(&pairs, "action") == Some("save") {
        st.flash = Some(FlashMessage::success("Form saved."));
    }
    drop(st);

    redirect("/")
}

// ---------------------------------------------------------------------------
// POST /generate
// ---------------------------------------------------------------------------

pub fn handle_generate(
    request: &mut Request,
    state: SharedState,
    service: SharedService,
) -> Response<Cursor<Vec<u8>>> {
    let body  = read_body(request);
    let pairs = parse_form(&body);

    let schedule_request = {
        let mut st = lock(&state);
        let next = apply_form(&st.form, &pairs);
        st.form = next;
        let schedule_request = encode(&st.form);
        if let Err(e) = st.submission.begin(schedule_request.clone()) {
            st.flash = Some(FlashMessage::error(format!("{}; please wait for it to finish.", e)));
            return redirect("/");
        }
        schedule_request
    };

    // The lock is released while the scheduler works so the page stays
    // responsive and shows the Pending state.
    let outcome = service.submit(&schedule_request);

    let mut st = lock(&state);
    if let Err(e) = st.submission.resolve(outcome) {
        tracing::warn!(error = %e, "dropping scheduler outcome");
    }
    drop(st);

    redirect("/")
}

// ---------------------------------------------------------------------------
// Form handling
// ---------------------------------------------------------------------------

/// Returns the form with posted values applied.
///
/// Free-text fields missing from the post keep their current text. Lab
/// subject rows are addressed by position (`lab_subject_N`, `lab_teacher_N`);
/// `action=add_lab` appends an empty row and `action=remove_lab:N` removes
/// row N.
pub fn apply_form(current: &RawConfig, pairs: &[(String, String)]) -> RawConfig {
    let mut next = current.clone();
    for field in FormField::ALL {
        if let Some(value) = form_get(pairs, field.key()) {
            next.set(field, value);
        }
    }

    let mut labs = current.lab_subjects.clone();
    for i in 0..labs.len() {
        if let Some(subject) = form_get(pairs, &format!("lab_subject_{}", i)) {
            labs = labs.with_subject(i, subject);
        }
        if let Some(teacher) = form_get(pairs, &format!("lab_teacher_{}", i)) {
            labs = labs.with_teacher(i, teacher);
        }
    }

    match form_get(pairs, "action") {
        Some("add_lab") => labs = labs.with_pushed(SubjectTeacher::default()),
        Some(action) => {
            if let Some(index) = action.strip_prefix("remove_lab:").and_then(|n| n.parse::<usize>().ok()) {
                labs = labs.without(index);
            }
        }
        None => {}
    }

    next.lab_subjects = labs;
    next
}

// ---------------------------------------------------------------------------
// Page builders
// ---------------------------------------------------------------------------

fn build_form_fields(form: &RawConfig) -> String {
    FormField::ALL
        .iter()
        .map(|&field| {
            // Plain text even for numbers: malformed input must survive a round trip.
            let inputmode = match field.kind() {
                FieldKind::Number => r#" inputmode="decimal""#,
                FieldKind::List   => "",
            };
            format!(
                r#"<label for="{key}">{label}:</label><input id="{key}" name="{key}" type="text"{inputmode} value="{value}">"#,
                key       = field.key(),
                label     = html_escape(field.label()),
                inputmode = inputmode,
                value     = html_escape(form.get(field)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

fn build_lab_rows(form: &RawConfig) -> String {
    if form.lab_subjects.is_empty() {
        return "<tr><td colspan=\"4\" class=\"hint\">No lab subjects paired with teachers.</td></tr>".into();
    }
    form.lab_subjects
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                r#"<tr><td>{n}</td><td><input name="lab_subject_{i}" value="{subject}"></td><td><input name="lab_teacher_{i}" value="{teacher}"></td><td><button type="submit" formaction="/form/save" name="action" value="remove_lab:{i}">Remove</button></td></tr>"#,
                n       = i + 1,
                i       = i,
                subject = html_escape(&entry.subject),
                teacher = html_escape(&entry.teacher),
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

fn render_flash_html(flash: Option<&FlashMessage>) -> String {
    match flash {
        None    => String::new(),
        Some(f) => {
            let cls = match f.kind {
                FlashKind::Success => "flash-success",
                FlashKind::Error   => "flash-error",
            };
            format!(r#"<div class="flash {}">{}</div>"#, cls, html_escape(&f.text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetable_studio::LabSubjects;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn posted_fields_replace_only_what_was_sent() {
        let next = apply_form(&RawConfig::default(), &pairs(&[("days", "Monday,Tuesday"), ("end_time", "abc")]));
        assert_eq!(next.days, "Monday,Tuesday");
        assert_eq!(next.end_time, "abc");
        assert_eq!(next.batches, RawConfig::default().batches);
    }

    #[test]
    fn lab_rows_are_edited_by_position() {
        let mut current = RawConfig::default();
        current.lab_subjects = LabSubjects::new(vec![
            SubjectTeacher::new("LP1", "T1"),
            SubjectTeacher::new("LP1", "T1"),
        ]);

        let next = apply_form(&current, &pairs(&[("lab_teacher_1", "T5"), ("action", "add_lab")]));
        assert_eq!(next.lab_subjects.len(), 3);
        assert_eq!(next.lab_subjects.get(0), Some(&SubjectTeacher::new("LP1", "T1")));
        assert_eq!(next.lab_subjects.get(1), Some(&SubjectTeacher::new("LP1", "T5")));

        let removed = apply_form(&next, &pairs(&[("action", "remove_lab:0")]));
        assert_eq!(removed.lab_subjects.get(0), Some(&SubjectTeacher::new("LP1", "T5")));
        // The previous form snapshot is unaffected.
        assert_eq!(current.lab_subjects.get(1), Some(&SubjectTeacher::new("LP1", "T1")));
    }
}
