// BmiScreen domain
// This crate contains the business logic: the BMI engine and the batch
// record processor built on top of it.

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Re-export the source module from bmi_screen_data for convenience
pub use bmi_screen_data::source;
