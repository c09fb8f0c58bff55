use serde::{Deserialize, Serialize};
use crate::config::form_number::FormNumber;
use crate::config::lab_subjects::SubjectTeacher;

/// The request body POSTed to the scheduler service.
///
/// Field names are the service's snake_case wire keys. Numbers are
/// forwarded as typed, including NaN (sent as `null`); the service is the
/// only judge of validity. `total_faculty` is not checked against the length
/// of `teachers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub divisions: FormNumber,
    pub batches: Vec<String>,
    pub theory_rooms: FormNumber,
    pub lab_rooms: FormNumber,
    pub teachers: Vec<String>,
    pub subjects: Vec<String>,
    pub practical_subjects: Vec<String>,
    /// Omitted from the body when no pairs were configured.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lab_subjects: Vec<SubjectTeacher>,
    pub start_time: FormNumber,
    pub end_time: FormNumber,
    pub lec_duration: FormNumber,
    pub lab_duration: FormNumber,
    pub days: Vec<String>,
    pub total_faculty: FormNumber,
}

impl ScheduleRequest {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
