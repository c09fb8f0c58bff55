use std::io::Cursor;
use tiny_http::Response;

use crate::routes::{json_download_response, json_response, not_found, redirect};
use crate::state::{lock, FlashMessage, SharedState};

// ---------------------------------------------------------------------------
// GET /timetable/export
// ---------------------------------------------------------------------------

pub fn handle_grid(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = lock(&state);
    let json = st.submission.grid().map(|g| g.to_json_pretty());

    match json {
        Some(Ok(json)) => {
            drop(st);
            json_download_response(json, "timetable.json")
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "could not serialize timetable");
            st.flash = Some(FlashMessage::error("Could not export the timetable."));
            drop(st);
            redirect("/")
        }
        None => {
            st.flash = Some(FlashMessage::error("Generate a timetable before exporting it."));
            drop(st);
            redirect("/")
        }
    }
}

// ---------------------------------------------------------------------------
// GET /timetable/request
// ---------------------------------------------------------------------------

pub fn handle_request(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = lock(&state);
    let json = st.submission.last_request().map(|r| r.to_json_pretty());
    drop(st);

    match json {
        Some(Ok(json)) => json_response(json),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "could not serialize request");
            not_found()
        }
        None => not_found(),
    }
}
