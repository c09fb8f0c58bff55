use serde_json::Value;
use thiserror::Error;

use crate::schedule::grid::{CanonicalGrid, GridBuilder, RowKey};
use crate::schedule::raw_schedule::{DivisionSchedule, RawSchedule, TimeSlot};

/// Why a response could not be turned into a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The response was an `{ "error": ... }` body; the message is kept verbatim.
    #[error("{0}")]
    ServiceError(String),
    /// The response matched no known timetable shape.
    #[error("response is not a timetable: {0}")]
    NotASchedule(String),
}

/// Flattens a classified response into the canonical grid.
///
/// Division trees produce one `(division, day)` row per day a division lists
/// under either `theory` or `practical`; theory sessions come first in the
/// cell, then practical sessions in entry and batch order. Time grids
/// produce one row per slot.
///
/// The result depends only on the input: no sorting, no randomness.
pub fn normalize(raw: &RawSchedule) -> Result<CanonicalGrid, NormalizeError> {
    match raw {
        RawSchedule::Error { message } => Err(NormalizeError::ServiceError(message.clone())),
        RawSchedule::Unrecognized { reason } => Err(NormalizeError::NotASchedule(reason.clone())),
        RawSchedule::DivisionTree { divisions, skipped } => Ok(normalize_divisions(divisions, *skipped)),
        RawSchedule::TimeGrid { slots, skipped } => Ok(normalize_slots(slots, *skipped)),
    }
}

/// Classifies and normalizes a response body in one step.
pub fn normalize_value(value: &Value) -> Result<CanonicalGrid, NormalizeError> {
    normalize(&RawSchedule::decode(value))
}

fn normalize_divisions(divisions: &[DivisionSchedule], skipped: usize) -> CanonicalGrid {
    let mut grid = GridBuilder::default();

    for division in divisions {
        for theory in &division.theory {
            let row = grid.row(RowKey::division_day(&division.division, &theory.day));
            let col = grid.column(&theory.day);
            grid.extend(row, col, theory.sessions.iter().cloned());
        }
        for practical in &division.practical {
            let row = grid.row(RowKey::division_day(&division.division, &practical.day));
            let col = grid.column(&practical.day);
            let sessions = practical
                .entries
                .iter()
                .flatten()
                .flat_map(|batch| batch.sessions.iter().cloned());
            grid.extend(row, col, sessions);
        }
    }

    let grid = grid.build(skipped);
    tracing::debug!(
        rows = grid.rows().len(),
        sessions = grid.session_count(),
        skipped,
        "normalized division-tree timetable"
    );
    grid
}

fn normalize_slots(slots: &[TimeSlot], skipped: usize) -> CanonicalGrid {
    let mut grid = GridBuilder::default();

    for slot in slots {
        let row = grid.row(RowKey::slot(&slot.label));
        for day in &slot.days {
            let col = grid.column(&day.day);
            grid.extend(row, col, day.sessions.iter().cloned());
        }
    }

    let grid = grid.build(skipped);
    tracing::debug!(
        rows = grid.rows().len(),
        sessions = grid.session_count(),
        skipped,
        "normalized time-grid timetable"
    );
    grid
}
