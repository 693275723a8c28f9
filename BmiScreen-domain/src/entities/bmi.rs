use serde::{Deserialize, Serialize};

/// Lower bounds of every band above the first. Each band is half-open with
/// an inclusive lower bound, so a BMI of exactly 25.0 is Overweight and
/// exactly 18.4 is NormalWeight.
const BAND_LOWER_BOUNDS: [f64; 5] = [18.4, 25.0, 30.0, 35.0, 40.0];

/// Index 0-5 of the band a BMI value falls in.
///
/// Both [`BmiCategory`] and [`HealthRisk`] are derived from this single
/// partition, which keeps the two classifications positionally in sync.
fn bmi_band(bmi: f64) -> usize {
    BAND_LOWER_BOUNDS.iter().take_while(|bound| bmi >= **bound).count()
}

/// Weight category for a BMI value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.4
    Underweight,

    /// BMI in [18.4, 25.0)
    NormalWeight,

    /// BMI in [25.0, 30.0)
    Overweight,

    /// BMI in [30.0, 35.0)
    ModeratelyObese,

    /// BMI in [35.0, 40.0)
    SeverelyObese,

    /// BMI of 40.0 and above
    VerySeverelyObese,
}

impl BmiCategory {
    /// Classify a BMI value into its weight category
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi_band(bmi) {
            0 => BmiCategory::Underweight,
            1 => BmiCategory::NormalWeight,
            2 => BmiCategory::Overweight,
            3 => BmiCategory::ModeratelyObese,
            4 => BmiCategory::SeverelyObese,
            _ => BmiCategory::VerySeverelyObese,
        }
    }
}

impl ToString for BmiCategory {
    fn to_string(&self) -> String {
        match self {
            BmiCategory::Underweight => "Underweight".to_string(),
            BmiCategory::NormalWeight => "Normal weight".to_string(),
            BmiCategory::Overweight => "Overweight".to_string(),
            BmiCategory::ModeratelyObese => "Moderately obese".to_string(),
            BmiCategory::SeverelyObese => "Severely obese".to_string(),
            BmiCategory::VerySeverelyObese => "Very severely obese".to_string(),
        }
    }
}

/// Health-risk tier for a BMI value, positionally parallel to [`BmiCategory`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthRisk {
    /// BMI below 18.4
    Malnutrition,

    /// BMI in [18.4, 25.0)
    Low,

    /// BMI in [25.0, 30.0)
    Enhanced,

    /// BMI in [30.0, 35.0)
    Medium,

    /// BMI in [35.0, 40.0)
    High,

    /// BMI of 40.0 and above
    VeryHigh,
}

impl HealthRisk {
    /// Classify a BMI value into its health-risk tier
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi_band(bmi) {
            0 => HealthRisk::Malnutrition,
            1 => HealthRisk::Low,
            2 => HealthRisk::Enhanced,
            3 => HealthRisk::Medium,
            4 => HealthRisk::High,
            _ => HealthRisk::VeryHigh,
        }
    }
}

impl ToString for HealthRisk {
    fn to_string(&self) -> String {
        match self {
            HealthRisk::Malnutrition => "Malnutrition risk".to_string(),
            HealthRisk::Low => "Low risk".to_string(),
            HealthRisk::Enhanced => "Enhanced risk".to_string(),
            HealthRisk::Medium => "Medium risk".to_string(),
            HealthRisk::High => "High risk".to_string(),
            HealthRisk::VeryHigh => "Very high risk".to_string(),
        }
    }
}

/// Unit of the height argument to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightUnit {
    /// Height given in centimeters
    Centimeters,
    /// Height given in meters
    Meters,
}
