use serde_json::{json, Value};
use tracing::warn;

use crate::entities::bmi::BmiCategory;
use crate::services::bmi::{BmiCalculator, BmiError};
use bmi_screen_data::models::person;
use bmi_screen_data::models::Measurements;
use bmi_screen_data::source::RecordSource;

/// Runs the BMI pipeline over every record a source provides.
///
/// All failures are contained here: an unreadable source yields an empty
/// batch, a bad record is skipped, and in both cases a diagnostic is logged.
/// Valid records come out annotated, in input order.
pub struct BatchProcessor<S: RecordSource> {
    source: S,
    calculator: BmiCalculator,
}

impl<S: RecordSource> BatchProcessor<S> {
    /// Create a processor over the given record source
    pub fn new(source: S) -> Self {
        Self {
            source,
            calculator: BmiCalculator::new(),
        }
    }

    /// Load, validate and annotate all records from the source.
    ///
    /// Each surviving record gains `BMI`, `BMICategory` and `HealthRisk`
    /// fields; every other field passes through untouched.
    pub fn process(&self) -> Vec<Value> {
        let records = match self.source.load() {
            Ok(records) => records,
            Err(e) => {
                warn!("failed to load records: {e}");
                return Vec::new();
            }
        };

        let mut annotated = Vec::with_capacity(records.len());
        for mut record in records {
            let measurements = match Measurements::from_value(&record) {
                Ok(measurements) => measurements,
                Err(e) => {
                    warn!("skipping record: {e}");
                    continue;
                }
            };

            let bmi = match self.calculator.calculate_cm(
                measurements.weight_kg as f64,
                measurements.height_cm as f64,
            ) {
                Ok(bmi) => bmi,
                Err(BmiError::ZeroHeight) => {
                    warn!(
                        height_cm = measurements.height_cm,
                        weight_kg = measurements.weight_kg,
                        "skipping record with degenerate height"
                    );
                    continue;
                }
            };

            let category = self.calculator.category(bmi);
            let risk = self.calculator.health_risk(bmi);

            if let Some(fields) = record.as_object_mut() {
                fields.insert(person::BMI.to_string(), json!(bmi));
                fields.insert(
                    person::BMI_CATEGORY.to_string(),
                    Value::String(category.to_string()),
                );
                fields.insert(
                    person::HEALTH_RISK.to_string(),
                    Value::String(risk.to_string()),
                );
            }
            annotated.push(record);
        }

        annotated
    }
}

/// Count annotated records classified into the given weight category
pub fn count_category(records: &[Value], category: BmiCategory) -> usize {
    let label = category.to_string();
    records
        .iter()
        .filter(|record| {
            record.get(person::BMI_CATEGORY).and_then(Value::as_str) == Some(label.as_str())
        })
        .count()
}
