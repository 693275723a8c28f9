use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::RecordError;

/// Required input fields of a person record
pub const GENDER: &str = "Gender";
pub const HEIGHT_CM: &str = "HeightCm";
pub const WEIGHT_KG: &str = "WeightKg";

/// Fields added to a record by processing
pub const BMI: &str = "BMI";
pub const BMI_CATEGORY: &str = "BMICategory";
pub const HEALTH_RISK: &str = "HealthRisk";

/// Validated measurements pulled out of a raw person record.
///
/// Gender must be present on the record but is opaque and stays on the record
/// itself, so it is not captured here. Height and weight must be JSON
/// integers; a fractional number counts as the wrong type, not a rounding
/// candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Measurements {
    /// Height in centimeters
    pub height_cm: i64,

    /// Weight in kilograms
    pub weight_kg: i64,
}

impl Measurements {
    /// Validate a raw record and extract its measurements
    pub fn from_value(record: &Value) -> Result<Self, RecordError> {
        let fields = record.as_object().ok_or(RecordError::NotAnObject)?;

        if !fields.contains_key(GENDER) {
            return Err(RecordError::MissingField { field: GENDER });
        }
        let height_cm = integer_field(fields, HEIGHT_CM)?;
        let weight_kg = integer_field(fields, WEIGHT_KG)?;

        Ok(Self {
            height_cm,
            weight_kg,
        })
    }
}

fn integer_field(fields: &Map<String, Value>, field: &'static str) -> Result<i64, RecordError> {
    let value = fields.get(field).ok_or(RecordError::MissingField { field })?;
    value.as_i64().ok_or_else(|| RecordError::WrongType {
        field,
        found: json_type_name(value),
    })
}

/// Human-readable JSON type name for diagnostics
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
