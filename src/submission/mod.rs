pub mod state;

pub use state::{Submission, SubmissionError, SubmissionState, NOT_A_SCHEDULE_MESSAGE};
