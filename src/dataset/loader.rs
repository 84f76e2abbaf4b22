use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::TriageError;
use crate::models::Record;

/// One untyped dataset row, keyed by column name in dataset order.
pub type Row = Map<String, Value>;

/// Loads a newline-delimited JSON dataset into typed records. Blank lines are
/// skipped; any other malformed line halts the load.
pub fn load_records(path: &Path) -> Result<Vec<Record>, TriageError> {
    let raw = fs::read_to_string(path)?;
    let mut records = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(line).map_err(|e| {
            TriageError::Dataset(format!("{}:{}: {}", path.display(), lineno + 1, e))
        })?;
        records.push(record);
    }
    debug!(path = %path.display(), rows = records.len(), "Loaded dataset");
    Ok(records)
}

/// Untyped counterpart of [`load_records`], used for spreadsheet export so
/// the dataset's columns pass through unchanged.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, TriageError> {
    let raw = fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row: Row = serde_json::from_str(line).map_err(|e| {
            TriageError::Dataset(format!("{}:{}: {}", path.display(), lineno + 1, e))
        })?;
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "Loaded dataset rows");
    Ok(rows)
}
