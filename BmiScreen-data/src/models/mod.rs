// Raw-record models and field-level validation
pub mod person;

// Re-export common types for easier imports
pub use person::Measurements;
