use std::io::{Cursor, Read};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::state::{SharedService, SharedState};
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn headers(pairs: &[(&str, &str)]) -> Vec<Header> {
    pairs
        .iter()
        .filter_map(|(k, v)| Header::from_bytes(k.as_bytes(), v.as_bytes()).ok())
        .collect()
}

fn bytes_response(status: u16, content_type: &str, extra: &[(&str, &str)], body: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = body.len();
    let mut hdrs = headers(&[("Content-Type", content_type)]);
    hdrs.extend(headers(extra));
    Response::new(StatusCode(status), hdrs, Cursor::new(body), Some(len), None)
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, "text/html; charset=utf-8", &[], body.into_bytes())
}

pub fn json_response(body: String) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, "application/json", &[], body.into_bytes())
}

pub fn json_download_response(body: String, filename: &str) -> Response<Cursor<Vec<u8>>> {
    let disposition = format!("attachment; filename=\"{}\"", filename);
    bytes_response(200, "application/json", &[("Content-Disposition", &disposition)], body.into_bytes())
}

pub fn redirect(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(303),
        headers(&[("Location", location), ("Content-Length", "0")]),
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    bytes_response(404, "text/plain", &[], b"404 Not Found".to_vec())
}

/// Reads a form-encoded request body. An unreadable body reads as empty.
pub fn read_body(request: &mut Request) -> String {
    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        tracing::warn!(error = %e, "could not read request body");
        body.clear();
    }
    body
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
///
/// Handlers receive a `&mut Request` so that the dispatcher retains
/// ownership and can call `request.respond(response)` at the end.
pub fn dispatch(mut request: Request, state: SharedState, service: SharedService) {
    let method = request.method().clone();
    let url    = request.url().to_owned();
    let path   = url.split('?').next().unwrap_or("").to_owned();

    tracing::debug!(method = ?method, %path, "request");

    let response = match (method, path.as_str()) {
        // ── Form + timetable ─────────────────────────────────────────────
        (Method::Get,  "/")          => handlers::timetable::handle_get(state),
        (Method::Post, "/form/save") => handlers::timetable::handle_save(&mut request, state),
        (Method::Post, "/generate")  => handlers::timetable::handle_generate(&mut request, state, service),

        // ── Export ───────────────────────────────────────────────────────
        (Method::Get, "/timetable/export")  => handlers::export::handle_grid(state),
        (Method::Get, "/timetable/request") => handlers::export::handle_request(state),

        // ── 404 ──────────────────────────────────────────────────────────
        _ => not_found(),
    };

    if let Err(e) = request.respond(response) {
        tracing::warn!(error = %e, "could not send response");
    }
}
