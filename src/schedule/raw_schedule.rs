use serde_json::{Map, Value};
use crate::schedule::session::Session;

/// Sessions listed under one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySessions {
    pub day: String,
    pub sessions: Vec<Session>,
}

/// Sessions of one batch inside a practical entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSessions {
    pub batch: String,
    pub sessions: Vec<Session>,
}

/// Practical entries listed under one day. Each entry is normally a
/// single-key `{batch: [sessions]}` object; its keys are kept in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticalDay {
    pub day: String,
    pub entries: Vec<Vec<BatchSessions>>,
}

/// One division of a division-tree response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionSchedule {
    pub division: String,
    pub theory: Vec<DaySessions>,
    pub practical: Vec<PracticalDay>,
}

/// One row of a time-grid response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub days: Vec<DaySessions>,
}

/// A scheduler response, classified by shape.
///
/// `decode` tries each shape in a fixed order: error, division tree, time
/// grid. Whatever matches none of them is `Unrecognized`. Inside a matched
/// shape, malformed pieces are dropped and counted in `skipped` instead of
/// failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSchedule {
    /// `{ "error": "..." }`
    Error { message: String },
    /// `division -> { theory: day -> [session], practical: day -> [{batch: [session]}] }`
    DivisionTree { divisions: Vec<DivisionSchedule>, skipped: usize },
    /// `time slot -> day -> [session]`
    TimeGrid { slots: Vec<TimeSlot>, skipped: usize },
    /// Not a shape this client knows.
    Unrecognized { reason: String },
}

impl RawSchedule {
    pub fn decode(value: &Value) -> RawSchedule {
        let top = match value.as_object() {
            Some(obj) => obj,
            None => {
                return RawSchedule::Unrecognized {
                    reason: format!("expected a JSON object, got {}", json_kind(value)),
                }
            }
        };

        if let Some(error) = top.get("error") {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return RawSchedule::Error { message };
        }

        if top.values().any(is_division_branch) {
            return decode_division_tree(top);
        }

        if !top.is_empty() && !top.values().any(Value::is_object) {
            return RawSchedule::Unrecognized {
                reason: "no entry maps to a day table".to_owned(),
            };
        }

        decode_time_grid(top)
    }

    pub fn skipped(&self) -> usize {
        match self {
            RawSchedule::DivisionTree { skipped, .. } | RawSchedule::TimeGrid { skipped, .. } => *skipped,
            _ => 0,
        }
    }
}

fn is_division_branch(value: &Value) -> bool {
    value
        .as_object()
        .map(|o| o.contains_key("theory") && o.contains_key("practical"))
        .unwrap_or(false)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Division tree
// ---------------------------------------------------------------------------

fn decode_division_tree(top: &Map<String, Value>) -> RawSchedule {
    let mut skipped = 0;
    let mut divisions = Vec::with_capacity(top.len());

    for (division, branch) in top {
        if !is_division_branch(branch) {
            tracing::warn!(division = %division, "division has no theory/practical tables; skipping");
            skipped += 1;
            continue;
        }

        let theory = match branch.get("theory") {
            Some(Value::Object(days)) => days
                .iter()
                .map(|(day, list)| DaySessions {
                    day: day.clone(),
                    sessions: decode_sessions(list, &format!("{division}/theory/{day}"), &mut skipped),
                })
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                tracing::warn!(division = %division, "theory table is not an object; skipping");
                skipped += 1;
                Vec::new()
            }
        };

        let practical = match branch.get("practical") {
            Some(Value::Object(days)) => days
                .iter()
                .map(|(day, list)| PracticalDay {
                    day: day.clone(),
                    entries: decode_practical_entries(list, &format!("{division}/practical/{day}"), &mut skipped),
                })
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                tracing::warn!(division = %division, "practical table is not an object; skipping");
                skipped += 1;
                Vec::new()
            }
        };

        divisions.push(DivisionSchedule { division: division.clone(), theory, practical });
    }

    RawSchedule::DivisionTree { divisions, skipped }
}

fn decode_practical_entries(list: &Value, context: &str, skipped: &mut usize) -> Vec<Vec<BatchSessions>> {
    let items = match list {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        _ => {
            tracing::warn!(context, "practical entries are not a list; skipping");
            *skipped += 1;
            return Vec::new();
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let batches = match item.as_object() {
            Some(b) => b,
            None => {
                tracing::warn!(context, index = i, "practical entry is not an object; skipping");
                *skipped += 1;
                continue;
            }
        };
        if batches.is_empty() {
            tracing::warn!(context, index = i, "practical entry names no batch; skipping");
            *skipped += 1;
            continue;
        }
        if batches.len() > 1 {
            tracing::warn!(
                context,
                index = i,
                batches = batches.len(),
                "practical entry names several batches; treating each as its own batch"
            );
        }

        let entry = batches
            .iter()
            .map(|(batch, list)| {
                let sessions = decode_sessions(list, &format!("{context}/{batch}"), skipped)
                    .into_iter()
                    .map(|s| if s.batch.is_none() { s.with_batch(batch.clone()) } else { s })
                    .collect();
                BatchSessions { batch: batch.clone(), sessions }
            })
            .collect();
        entries.push(entry);
    }
    entries
}

// ---------------------------------------------------------------------------
// Time grid
// ---------------------------------------------------------------------------

fn decode_time_grid(top: &Map<String, Value>) -> RawSchedule {
    let mut skipped = 0;
    let slots = top
        .iter()
        .map(|(label, row)| {
            let days = match row {
                Value::Object(days) => days
                    .iter()
                    .map(|(day, list)| DaySessions {
                        day: day.clone(),
                        sessions: decode_sessions(list, &format!("{label}/{day}"), &mut skipped),
                    })
                    .collect(),
                _ => {
                    tracing::warn!(slot = %label, "time slot is not a day table; leaving it empty");
                    skipped += 1;
                    Vec::new()
                }
            };
            TimeSlot { label: label.clone(), days }
        })
        .collect();

    RawSchedule::TimeGrid { slots, skipped }
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

fn decode_sessions(list: &Value, context: &str, skipped: &mut usize) -> Vec<Session> {
    let items = match list {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        _ => {
            tracing::warn!(context, "session list is not a list; skipping");
            *skipped += 1;
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match Session::from_value(item) {
            Ok(session) => Some(session),
            Err(reason) => {
                tracing::warn!(context, index = i, %reason, "dropping malformed session");
                *skipped += 1;
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(subject: &str) -> Value {
        json!({ "subject": subject, "teacher": "T1", "room": 1, "time": "8:00 - 9:00" })
    }

    #[test]
    fn error_key_wins_over_every_other_shape() {
        let raw = RawSchedule::decode(&json!({
            "error": "no feasible schedule",
            "Division-1": { "theory": {}, "practical": {} }
        }));
        assert_eq!(raw, RawSchedule::Error { message: "no feasible schedule".into() });
    }

    #[test]
    fn theory_and_practical_select_the_division_tree() {
        let raw = RawSchedule::decode(&json!({
            "Division-1": {
                "theory": { "Monday": [session("CNS")] },
                "practical": { "Monday": [{ "K4": [session("LP1")] }] }
            }
        }));
        match raw {
            RawSchedule::DivisionTree { divisions, skipped } => {
                assert_eq!(skipped, 0);
                assert_eq!(divisions.len(), 1);
                let batch = &divisions[0].practical[0].entries[0][0];
                assert_eq!(batch.batch, "K4");
                assert_eq!(batch.sessions[0].batch.as_deref(), Some("K4"));
            }
            other => panic!("expected a division tree, got {other:?}"),
        }
    }

    #[test]
    fn other_objects_are_time_grids() {
        let raw = RawSchedule::decode(&json!({ "09:00": { "Monday": [session("CNS")] } }));
        assert!(matches!(raw, RawSchedule::TimeGrid { ref slots, skipped: 0 } if slots.len() == 1));
    }

    #[test]
    fn non_objects_are_unrecognized() {
        assert!(matches!(RawSchedule::decode(&json!([1, 2])), RawSchedule::Unrecognized { .. }));
        assert!(matches!(RawSchedule::decode(&json!("ok")), RawSchedule::Unrecognized { .. }));
        assert!(matches!(RawSchedule::decode(&json!({ "a": 1 })), RawSchedule::Unrecognized { .. }));
    }

    #[test]
    fn multi_batch_entries_keep_every_batch() {
        let raw = RawSchedule::decode(&json!({
            "Division-1": {
                "theory": {},
                "practical": { "Tuesday": [{ "K4": [session("LP1")], "L4": [session("CNSL")] }] }
            }
        }));
        let RawSchedule::DivisionTree { divisions, skipped } = raw else {
            panic!("expected a division tree");
        };
        assert_eq!(skipped, 0);
        let names: Vec<&str> = divisions[0].practical[0].entries[0].iter().map(|b| b.batch.as_str()).collect();
        assert_eq!(names, vec!["K4", "L4"]);
    }

    #[test]
    fn malformed_pieces_are_counted_not_fatal() {
        let raw = RawSchedule::decode(&json!({
            "Division-1": {
                "theory": { "Monday": [session("CNS"), { "subject": "broken" }], "Tuesday": "nope" },
                "practical": { "Monday": [{}, 7, { "K4": [session("LP1")] }] }
            }
        }));
        assert_eq!(raw.skipped(), 4);
    }
}
