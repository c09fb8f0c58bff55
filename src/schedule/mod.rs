pub mod session;
pub mod raw_schedule;
pub mod grid;
pub mod normalizer;

pub use session::Session;
pub use raw_schedule::{BatchSessions, DaySessions, DivisionSchedule, PracticalDay, RawSchedule, TimeSlot};
pub use grid::{CanonicalGrid, RowKey};
pub use normalizer::{normalize, normalize_value, NormalizeError};
