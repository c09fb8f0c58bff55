pub mod error;
pub mod http_client;

pub use error::{ClientError, FALLBACK_ERROR_MESSAGE};
pub use http_client::{HttpScheduleClient, ScheduleService, DEFAULT_ENDPOINT};
