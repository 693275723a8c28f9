use thiserror::Error;

use crate::entities::bmi::{BmiCategory, HealthRisk, HeightUnit};

/// BMI engine errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BmiError {
    /// Height in meters is exactly zero, so the formula is undefined.
    /// Normally unreachable through validated input because the range guard
    /// handles everything below zero first.
    #[error("height in meters is zero, BMI is undefined")]
    ZeroHeight,
}

/// Computes BMI values from mass and height.
///
/// Measurements outside the plausible range are clamped to a BMI of 0 rather
/// than rejected; callers that need to distinguish garbage input must check
/// before calling.
#[derive(Debug, Clone)]
pub struct BmiCalculator {
    min_height: f64,
    min_weight_kg: f64,
    max_height: f64,
    max_weight_kg: f64,
}

impl Default for BmiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BmiCalculator {
    /// Create a calculator with the standard plausibility bounds
    pub fn new() -> Self {
        Self {
            min_height: 0.0,
            min_weight_kg: 0.0,
            max_height: f64::MAX,
            max_weight_kg: f64::MAX,
        }
    }

    /// Compute a BMI value, rounded to `decimal_places`.
    ///
    /// The range guard compares the height argument as passed, before any
    /// unit conversion. Out-of-range mass or height yields `Ok(0.0)`.
    pub fn calculate(
        &self,
        mass_kg: f64,
        height: f64,
        unit: HeightUnit,
        decimal_places: u32,
    ) -> Result<f64, BmiError> {
        let height_m = match unit {
            HeightUnit::Centimeters => height / 100.0,
            HeightUnit::Meters => height,
        };

        if height < self.min_height || mass_kg < self.min_weight_kg {
            return Ok(0.0);
        }
        if height > self.max_height || mass_kg > self.max_weight_kg {
            return Ok(0.0);
        }

        if height_m == 0.0 {
            return Err(BmiError::ZeroHeight);
        }

        let bmi = mass_kg / height_m.powi(2);
        Ok(round_to(bmi, decimal_places))
    }

    /// The common path: height in centimeters, two decimal places
    pub fn calculate_cm(&self, mass_kg: f64, height_cm: f64) -> Result<f64, BmiError> {
        self.calculate(mass_kg, height_cm, HeightUnit::Centimeters, 2)
    }

    /// Weight category for a BMI value
    pub fn category(&self, bmi: f64) -> BmiCategory {
        BmiCategory::from_bmi(bmi)
    }

    /// Health-risk tier for a BMI value
    pub fn health_risk(&self, bmi: f64) -> HealthRisk {
        HealthRisk::from_bmi(bmi)
    }
}

/// Round half to even (banker's rounding) at `decimal_places`
fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round_ties_even() / factor
}
