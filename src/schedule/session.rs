use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One scheduled subject/teacher/room assignment.
///
/// `batch` is only present for practical sessions. Text fields also accept
/// JSON numbers (the scheduler emits room numbers as integers); a number is
/// kept in its JSON text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(deserialize_with = "text_or_number")]
    pub subject: String,
    #[serde(deserialize_with = "text_or_number")]
    pub teacher: String,
    #[serde(deserialize_with = "text_or_number")]
    pub room: String,
    #[serde(deserialize_with = "text_or_number")]
    pub time: String,
    #[serde(default, deserialize_with = "optional_text_or_number", skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

impl Session {
    pub fn new(
        subject: impl Into<String>,
        teacher: impl Into<String>,
        room: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Session {
            subject: subject.into(),
            teacher: teacher.into(),
            room: room.into(),
            time: time.into(),
            batch: None,
        }
    }

    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = Some(batch.into());
        self
    }

    /// Decodes one session; the error describes what was wrong with it.
    pub fn from_value(value: &Value) -> Result<Session, String> {
        Session::deserialize(value).map_err(|e| e.to_string())
    }

    /// `subject (teacher) - room`, followed by ` [batch]` for practicals.
    pub fn display_label(&self) -> String {
        match &self.batch {
            Some(batch) => format!("{} ({}) - {} [{}]", self.subject, self.teacher, self.room, batch),
            None => format!("{} ({}) - {}", self.subject, self.teacher, self.room),
        }
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    scalar_text(value).ok_or_else(|| serde::de::Error::custom("expected a string or number"))
}

fn optional_text_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => scalar_text(other)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("expected a string or number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_rooms_are_accepted() {
        let s = Session::from_value(&json!({
            "subject": "CNS", "teacher": "Teacher3", "room": 2, "time": "8:00 - 9:00"
        }))
        .unwrap();
        assert_eq!(s.room, "2");
        assert_eq!(s.batch, None);
    }

    #[test]
    fn missing_fields_are_reported_not_panicked() {
        let err = Session::from_value(&json!({ "subject": "CNS", "room": "R1" })).unwrap_err();
        assert!(err.contains("teacher"), "unexpected error: {err}");
        assert!(Session::from_value(&json!("CNS")).is_err());
    }

    #[test]
    fn label_includes_batch_only_when_present() {
        let theory = Session::new("CNS", "T1", "R1", "09:00");
        assert_eq!(theory.display_label(), "CNS (T1) - R1");
        assert_eq!(theory.with_batch("K4").display_label(), "CNS (T1) - R1 [K4]");
    }
}
