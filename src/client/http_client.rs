use crate::client::error::ClientError;
use crate::config::request::ScheduleRequest;
use crate::schedule::raw_schedule::RawSchedule;

/// Default endpoint of the scheduler service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/generate-timetable";

/// Anything that can turn a request into a scheduler response.
///
/// `HttpScheduleClient` is the real implementation; tests and demos plug in
/// their own.
pub trait ScheduleService {
    fn submit(&self, request: &ScheduleRequest) -> Result<RawSchedule, ClientError>;
}

/// POSTs requests to a scheduler over HTTP.
///
/// One attempt per call: no retries and no timeout. A status other than 200
/// is a failure carrying the body's `error` message.
#[derive(Clone)]
pub struct HttpScheduleClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpScheduleClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpScheduleClient {
            endpoint: endpoint.into(),
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScheduleService for HttpScheduleClient {
    fn submit(&self, request: &ScheduleRequest) -> Result<RawSchedule, ClientError> {
        let body = request.to_json()?;
        tracing::info!(endpoint = %self.endpoint, bytes = body.len(), "submitting timetable request");

        let reply = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body);

        let response = match reply {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                let err = ClientError::from_failed_reply(status, &text);
                tracing::warn!(status, error = %err, "scheduler rejected the request");
                return Err(err);
            }
            Err(ureq::Error::Transport(transport)) => {
                tracing::warn!(error = %transport, "scheduler unreachable");
                return Err(ClientError::Transport(transport.to_string()));
            }
        };

        let status = response.status();
        let text = response
            .into_string()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if status != 200 {
            let err = ClientError::from_failed_reply(status, &text);
            tracing::warn!(status, error = %err, "scheduler replied without a timetable");
            return Err(err);
        }

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ClientError::InvalidBody(e.to_string()))?;
        tracing::info!(status, bytes = text.len(), "scheduler replied");
        Ok(RawSchedule::decode(&value))
    }
}
