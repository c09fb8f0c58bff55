pub mod config;
pub mod schedule;
pub mod projection;
pub mod client;
pub mod submission;

// Convenience re-exports
pub use config::{encode, FieldKind, FormField, FormNumber, LabSubjects, RawConfig, ScheduleRequest, SubjectTeacher};
pub use schedule::{normalize, normalize_value, CanonicalGrid, NormalizeError, RawSchedule, RowKey, Session};
pub use projection::{project, render_html_table, render_text_table, Projection};
pub use client::{ClientError, HttpScheduleClient, ScheduleService};
pub use submission::{Submission, SubmissionError, SubmissionState};
