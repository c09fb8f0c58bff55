pub mod timetable;
pub mod export;
