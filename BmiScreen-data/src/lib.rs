// BmiScreen data layer
// Loads raw person records from disk and validates their fields before the
// domain layer computes anything from them.

// Load/validation error types
pub mod errors;

// Raw-record field names and measurement extraction
pub mod models;

// Record sources (file-backed and the trait seam for tests)
pub mod source;

// Re-export common types for easier imports
pub use errors::{RecordError, SourceError};
pub use source::{JsonFileSource, RecordSource};
