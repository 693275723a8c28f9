use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::SourceError;
use crate::models::person::json_type_name;

/// A source of raw person records.
///
/// The domain layer's batch processor consumes records through this trait so
/// tests can substitute in-memory or failing sources for the file-backed one.
pub trait RecordSource {
    /// Load every raw record from the source
    fn load(&self) -> Result<Vec<Value>, SourceError>;
}

/// Record source backed by a JSON file containing a top-level array.
///
/// Elements are returned as-is; per-record validation happens later so one
/// bad record cannot poison its siblings.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Value>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.clone()));
        }

        let raw = fs::read_to_string(&self.path)?;
        let parsed: Value = serde_json::from_str(&raw)?;

        match parsed {
            Value::Array(records) => {
                debug!(path = %self.path.display(), count = records.len(), "loaded records");
                Ok(records)
            }
            other => Err(SourceError::UnexpectedShape(format!(
                "expected a top-level array of records, found {}",
                json_type_name(&other)
            ))),
        }
    }
}
