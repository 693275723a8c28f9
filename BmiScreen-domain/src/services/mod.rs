// Business logic services
pub mod batch;
pub mod bmi;

// Re-export common types for easier imports
pub use batch::{count_category, BatchProcessor};
pub use bmi::{BmiCalculator, BmiError};
