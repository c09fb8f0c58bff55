use serde::Serialize;
use crate::schedule::grid::CanonicalGrid;

/// One rendered row: its header label and one list of session labels per
/// day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedRow {
    pub label: String,
    pub cells: Vec<Vec<String>>,
}

/// A day × row matrix ready for display.
///
/// `header` is the caller's day axis; every row has exactly `header.len()`
/// cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub header: Vec<String>,
    pub rows: Vec<ProjectedRow>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.cells.iter().all(Vec::is_empty))
    }
}

/// Lays the grid out over the given days.
///
/// The columns are exactly `days`, in that order: a configured day missing
/// from the grid becomes an empty column and a grid day that is not
/// configured is not shown. Sessions sharing a cell are listed in grid
/// order; they are parallel sessions, not conflicts.
pub fn project<S: AsRef<str>>(grid: &CanonicalGrid, days: &[S]) -> Projection {
    let header: Vec<String> = days.iter().map(|d| d.as_ref().to_owned()).collect();

    let column_of: Vec<Option<usize>> = header
        .iter()
        .map(|day| grid.columns().iter().position(|c| c == day))
        .collect();

    let rows = grid
        .rows()
        .iter()
        .enumerate()
        .map(|(r, key)| ProjectedRow {
            label: key.label(),
            cells: column_of
                .iter()
                .map(|col| match col {
                    Some(c) => grid.cell(r, *c).iter().map(|s| s.display_label()).collect(),
                    None => Vec::new(),
                })
                .collect(),
        })
        .collect();

    Projection { header, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::normalize_value;
    use serde_json::json;

    fn cns() -> serde_json::Value {
        json!({ "subject": "CNS", "teacher": "T1", "room": "R1", "time": "09:00" })
    }

    #[test]
    fn configured_days_drive_the_columns() {
        let grid = normalize_value(&json!({
            "09:00": { "Monday": [cns()], "Saturday": [cns()] }
        }))
        .unwrap();

        let p = project(&grid, &["Monday", "Tuesday"]);
        assert_eq!(p.header, vec!["Monday", "Tuesday"]);
        assert_eq!(p.rows.len(), 1);
        assert_eq!(p.rows[0].label, "09:00");
        assert_eq!(p.rows[0].cells, vec![vec!["CNS (T1) - R1".to_owned()], vec![]]);
    }

    #[test]
    fn parallel_sessions_stack_in_one_cell() {
        let grid = normalize_value(&json!({
            "Division-1": {
                "theory": {},
                "practical": { "Monday": [
                    { "K4": [{ "subject": "LP1", "teacher": "T2", "room": 3, "time": "8:00 - 10:00" }] },
                    { "L4": [{ "subject": "CNSL", "teacher": "T4", "room": 1, "time": "8:00 - 10:00" }] }
                ] }
            }
        }))
        .unwrap();

        let p = project(&grid, &["Monday"]);
        assert_eq!(p.rows[0].label, "Division-1 / Monday");
        assert_eq!(
            p.rows[0].cells[0],
            vec!["LP1 (T2) - 3 [K4]".to_owned(), "CNSL (T4) - 1 [L4]".to_owned()]
        );
    }
}
