use std::collections::HashMap;
use serde::Serialize;
use crate::schedule::session::Session;

/// Identifies one row of the canonical grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowKey {
    /// A time-slot row from a time-grid response.
    Slot { label: String },
    /// One day of one division from a division-tree response.
    DivisionDay { division: String, day: String },
}

impl RowKey {
    pub fn slot(label: impl Into<String>) -> Self {
        RowKey::Slot { label: label.into() }
    }

    pub fn division_day(division: impl Into<String>, day: impl Into<String>) -> Self {
        RowKey::DivisionDay { division: division.into(), day: day.into() }
    }

    /// Text shown in the row header cell.
    pub fn label(&self) -> String {
        match self {
            RowKey::Slot { label } => label.clone(),
            RowKey::DivisionDay { division, day } => format!("{} / {}", division, day),
        }
    }
}

/// The shape-independent timetable every renderer is built from.
///
/// `cells[r][c]` holds the sessions of row `rows[r]` on day `columns[c]`, in
/// the order they were listed by the scheduler. Rows and columns are in
/// first-seen order. `skipped` counts malformed pieces of the response that
/// were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalGrid {
    rows: Vec<RowKey>,
    columns: Vec<String>,
    cells: Vec<Vec<Vec<Session>>>,
    skipped: usize,
}

impl CanonicalGrid {
    pub fn rows(&self) -> &[RowKey] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn cell(&self, row: usize, column: usize) -> &[Session] {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sessions for `row` on `day`; empty when either is unknown.
    pub fn sessions_at(&self, row: &RowKey, day: &str) -> &[Session] {
        let r = self.rows.iter().position(|k| k == row);
        let c = self.columns.iter().position(|d| d == day);
        match (r, c) {
            (Some(r), Some(c)) => self.cell(r, c),
            _ => &[],
        }
    }

    pub fn session_count(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.session_count() == 0
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Accumulates sessions into rows and day columns, merging repeated keys
/// into the same row instead of creating duplicates.
#[derive(Debug, Default)]
pub(crate) struct GridBuilder {
    rows: Vec<RowKey>,
    row_index: HashMap<RowKey, usize>,
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
    cells: HashMap<(usize, usize), Vec<Session>>,
}

impl GridBuilder {
    pub(crate) fn row(&mut self, key: RowKey) -> usize {
        if let Some(&i) = self.row_index.get(&key) {
            return i;
        }
        let i = self.rows.len();
        self.rows.push(key.clone());
        self.row_index.insert(key, i);
        i
    }

    pub(crate) fn column(&mut self, day: &str) -> usize {
        if let Some(&i) = self.column_index.get(day) {
            return i;
        }
        let i = self.columns.len();
        self.columns.push(day.to_owned());
        self.column_index.insert(day.to_owned(), i);
        i
    }

    pub(crate) fn extend(&mut self, row: usize, column: usize, sessions: impl IntoIterator<Item = Session>) {
        self.cells.entry((row, column)).or_default().extend(sessions);
    }

    pub(crate) fn build(mut self, skipped: usize) -> CanonicalGrid {
        let width = self.columns.len();
        let cells = (0..self.rows.len())
            .map(|r| {
                (0..width)
                    .map(|c| self.cells.remove(&(r, c)).unwrap_or_default())
                    .collect()
            })
            .collect();
        CanonicalGrid { rows: self.rows, columns: self.columns, cells, skipped }
    }
}
