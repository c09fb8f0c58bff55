use thiserror::Error;

/// Message shown when a failed response carries no `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unable to generate timetable.";

/// Why a submission produced no schedule.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Non-200 reply. `message` is the body's `error` field, verbatim.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The request never got an HTTP reply.
    #[error("could not reach the scheduler: {0}")]
    Transport(String),

    /// A 200 reply whose body is not JSON.
    #[error("scheduler sent an unreadable response: {0}")]
    InvalidBody(String),

    #[error("could not encode the request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ClientError {
    /// Builds a `Service` error from a failed reply's body text.
    pub fn from_failed_reply(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned());
        ClientError::Service { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_shown_verbatim() {
        let e = ClientError::from_failed_reply(400, r#"{"error":"no feasible schedule"}"#);
        assert_eq!(e.to_string(), "no feasible schedule");
    }

    #[test]
    fn missing_error_field_falls_back() {
        assert_eq!(ClientError::from_failed_reply(500, "<html>oops</html>").to_string(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(ClientError::from_failed_reply(502, r#"{"detail":"x"}"#).to_string(), FALLBACK_ERROR_MESSAGE);
    }
}
