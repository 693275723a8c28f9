use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading a record collection from disk.
///
/// One variant per failure kind so the caller can report a precise
/// diagnostic; none of these abort a batch run.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The record file does not exist
    #[error("record file not found: {0}")]
    NotFound(PathBuf),

    /// The record file exists but could not be read
    #[error("failed to read record file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not valid JSON
    #[error("failed to decode record data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON parsed but the top level is not an array of records
    #[error("unexpected record data shape: {0}")]
    UnexpectedShape(String),
}

/// Validation error for a single person record.
///
/// Record-level failures are logged and the record skipped; they never stop
/// processing of the remaining records.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// The array element is not a JSON object
    #[error("record is not a JSON object")]
    NotAnObject,

    /// A required field is absent
    #[error("record is missing required field {field}")]
    MissingField { field: &'static str },

    /// A measurement field holds the wrong JSON type
    #[error("field {field} should be an integer, found {found}")]
    WrongType {
        field: &'static str,
        found: &'static str,
    },
}
