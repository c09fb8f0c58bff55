use thiserror::Error;

use crate::client::error::ClientError;
use crate::client::http_client::ScheduleService;
use crate::config::request::ScheduleRequest;
use crate::schedule::grid::CanonicalGrid;
use crate::schedule::normalizer::{normalize, NormalizeError};
use crate::schedule::raw_schedule::RawSchedule;

/// Shown when the scheduler answered 200 with something that is not a
/// timetable.
pub const NOT_A_SCHEDULE_MESSAGE: &str = "The scheduler returned a response that is not a timetable.";

/// Where the current submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; `request` is what was sent.
    Pending { request: ScheduleRequest },
    /// The last response normalized into a grid.
    Succeeded { request: ScheduleRequest, grid: CanonicalGrid },
    /// The last submission failed; `message` is shown to the user as-is.
    Failed { request: ScheduleRequest, message: String },
}

/// A transition that the current state does not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("a timetable request is already in flight")]
    AlreadyPending,
    #[error("no timetable request is in flight")]
    NotPending,
}

/// The request lifecycle: `begin` → (network) → `resolve`.
///
/// Only one request may be in flight. Every resolved outcome replaces the
/// previous grid or error wholesale.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn new() -> Self {
        Submission::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending { .. })
    }

    pub fn grid(&self) -> Option<&CanonicalGrid> {
        match &self.state {
            SubmissionState::Succeeded { grid, .. } => Some(grid),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The request behind the current state, if any.
    pub fn last_request(&self) -> Option<&ScheduleRequest> {
        match &self.state {
            SubmissionState::Idle => None,
            SubmissionState::Pending { request }
            | SubmissionState::Succeeded { request, .. }
            | SubmissionState::Failed { request, .. } => Some(request),
        }
    }

    /// Marks `request` as in flight. Refused while another one is.
    pub fn begin(&mut self, request: ScheduleRequest) -> Result<(), SubmissionError> {
        if self.is_pending() {
            return Err(SubmissionError::AlreadyPending);
        }
        self.state = SubmissionState::Pending { request };
        Ok(())
    }

    /// Records the outcome of the in-flight request.
    pub fn resolve(&mut self, outcome: Result<RawSchedule, ClientError>) -> Result<(), SubmissionError> {
        let request = match std::mem::take(&mut self.state) {
            SubmissionState::Pending { request } => request,
            other => {
                self.state = other;
                return Err(SubmissionError::NotPending);
            }
        };

        self.state = match outcome.map(|raw| normalize(&raw)) {
            Ok(Ok(grid)) => {
                tracing::info!(rows = grid.rows().len(), sessions = grid.session_count(), "timetable received");
                SubmissionState::Succeeded { request, grid }
            }
            Ok(Err(NormalizeError::ServiceError(message))) => {
                tracing::warn!(%message, "scheduler reported an error");
                SubmissionState::Failed { request, message }
            }
            Ok(Err(NormalizeError::NotASchedule(reason))) => {
                tracing::warn!(%reason, "scheduler response is not a timetable");
                SubmissionState::Failed { request, message: NOT_A_SCHEDULE_MESSAGE.to_owned() }
            }
            Err(err) => SubmissionState::Failed { request, message: err.to_string() },
        };
        Ok(())
    }

    /// `begin`, submit through `service`, then `resolve`, for callers that
    /// can block on the network call.
    pub fn run<S: ScheduleService + ?Sized>(
        &mut self,
        service: &S,
        request: ScheduleRequest,
    ) -> Result<&SubmissionState, SubmissionError> {
        self.begin(request.clone())?;
        let outcome = service.submit(&request);
        self.resolve(outcome)?;
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{encode, RawConfig};
    use serde_json::json;

    fn request() -> ScheduleRequest {
        encode(&RawConfig::default())
    }

    #[test]
    fn resubmitting_while_pending_is_refused() {
        let mut sub = Submission::new();
        sub.begin(request()).unwrap();
        assert_eq!(sub.begin(request()), Err(SubmissionError::AlreadyPending));
        assert!(sub.is_pending());
    }

    #[test]
    fn resolve_without_begin_is_refused() {
        let mut sub = Submission::new();
        assert_eq!(sub.resolve(Err(ClientError::Transport("x".into()))), Err(SubmissionError::NotPending));
        assert_eq!(sub.state(), &SubmissionState::Idle);
    }

    #[test]
    fn outcomes_map_to_terminal_states() {
        let mut sub = Submission::new();

        sub.begin(request()).unwrap();
        sub.resolve(Ok(RawSchedule::decode(&json!({ "09:00": { "Monday": [] } })))).unwrap();
        assert!(sub.grid().is_some());

        sub.begin(request()).unwrap();
        sub.resolve(Err(ClientError::Service { status: 400, message: "no feasible schedule".into() })).unwrap();
        assert_eq!(sub.error_message(), Some("no feasible schedule"));
        assert!(sub.grid().is_none());

        sub.begin(request()).unwrap();
        sub.resolve(Ok(RawSchedule::decode(&json!([])))).unwrap();
        assert_eq!(sub.error_message(), Some(NOT_A_SCHEDULE_MESSAGE));
    }
}
