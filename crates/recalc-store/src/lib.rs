#![forbid(unsafe_code)]

//! CSV persistence for the calculation history.
//!
//! The history file is a plain CSV table with the header
//! `operand_a,operand_b,operation,result,timestamp` and one row per
//! calculation, in chronological order. Numeric fields use the shortest
//! round-trip representation and timestamps are RFC 3339, so a saved
//! history loads back losslessly.
//!
//! Loading is strict: a header that does not match exactly (missing,
//! reordered, or extra columns) and any row that fails to parse are
//! format errors, reported with enough context to point at the bad line.

use std::fs;
use std::path::Path;

use thiserror::Error;

use recalc_core::Calculation;

/// The exact column set of the history file, in order.
pub const EXPECTED_HEADER: [&str; 5] =
    ["operand_a", "operand_b", "operation", "result", "timestamp"];

/// Persistence failure: I/O or file format.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("history file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("history file header mismatch: expected [{expected}], found [{found}]")]
    Header { expected: String, found: String },

    #[error("history file line {line} is malformed: {message}")]
    Row { line: u64, message: String },
}

impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        let message = error.to_string();
        let line = error.position().map_or(0, csv::Position::line);
        match error.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            _ => Self::Row { line, message },
        }
    }
}

/// Write the history to `path`, creating the parent directory if needed.
pub fn save(path: &Path, entries: &[Calculation]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    // Write the header explicitly so an empty history still produces a
    // well-formed file.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(EXPECTED_HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a history previously written by [`save`].
///
/// The caller decides what a missing file means; here it is an
/// [`StoreError::Io`] like any other I/O failure.
pub fn load(path: &Path) -> Result<Vec<Calculation>, StoreError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let found: Vec<&str> = headers.iter().collect();
    if found.as_slice() != EXPECTED_HEADER {
        return Err(StoreError::Header {
            expected: EXPECTED_HEADER.join(","),
            found: found.join(","),
        });
    }

    let mut entries = Vec::new();
    for row in reader.deserialize() {
        let entry: Calculation = row?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recalc_core::OpKind;
    use std::io::ErrorKind;

    fn sample_history() -> Vec<Calculation> {
        vec![
            Calculation::new(OpKind::Add, 2.0, 3.0, 5.0),
            Calculation::new(OpKind::Divide, 1.0, 3.0, 1.0 / 3.0),
            Calculation::new(OpKind::Root, -8.0, 3.0, -2.0),
        ]
    }

    #[test]
    fn save_then_load_round_trips_losslessly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let history = sample_history();

        save(&path, &history).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, history);
        // Calculation equality ignores timestamps; pin those separately so
        // the round trip is genuinely lossless.
        for (loaded, original) in loaded.iter().zip(&history) {
            assert_eq!(loaded.created_at, original.created_at);
        }
    }

    #[test]
    fn saved_file_carries_the_exact_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        save(&path, &sample_history()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let first_line = contents.lines().next().unwrap();
        assert_eq!(first_line, EXPECTED_HEADER.join(","));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/history.csv");
        save(&path, &sample_history()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn empty_history_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        save(&path, &[]).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.csv");
        match load(&path) {
            Err(StoreError::Io(error)) => assert_eq!(error.kind(), ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_header_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(&path, "operation,operand_a,operand_b,result,timestamp\n").unwrap();

        assert!(matches!(load(&path), Err(StoreError::Header { .. })));
    }

    #[test]
    fn extra_column_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "operand_a,operand_b,operation,result,timestamp,note\n",
        )
        .unwrap();

        assert!(matches!(load(&path), Err(StoreError::Header { .. })));
    }

    #[test]
    fn missing_column_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(&path, "operand_a,operand_b,operation,result\n").unwrap();

        assert!(matches!(load(&path), Err(StoreError::Header { .. })));
    }

    #[test]
    fn unparseable_number_is_a_row_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "operand_a,operand_b,operation,result,timestamp\n\
             two,3,add,5,2026-01-01T00:00:00Z\n",
        )
        .unwrap();

        assert!(matches!(load(&path), Err(StoreError::Row { .. })));
    }

    #[test]
    fn unknown_operation_is_a_row_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "operand_a,operand_b,operation,result,timestamp\n\
             2,3,modulo,5,2026-01-01T00:00:00Z\n",
        )
        .unwrap();

        assert!(matches!(load(&path), Err(StoreError::Row { .. })));
    }

    #[test]
    fn bad_timestamp_is_a_row_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "operand_a,operand_b,operation,result,timestamp\n\
             2,3,add,5,yesterday\n",
        )
        .unwrap();

        assert!(matches!(load(&path), Err(StoreError::Row { .. })));
    }

    #[test]
    fn rows_load_in_chronological_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "operand_a,operand_b,operation,result,timestamp\n\
             1,1,add,2,2026-01-01T00:00:00Z\n\
             2,2,add,4,2026-01-02T00:00:00Z\n",
        )
        .unwrap();

        let loaded = load(&path).unwrap();
        let results: Vec<f64> = loaded.iter().map(|c| c.result).collect();
        assert_eq!(results, vec![2.0, 4.0]);
    }
}
