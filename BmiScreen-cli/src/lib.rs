// BmiScreen-cli lib.rs
//
// Library entry point for the command-line shell, split out from the binary
// so integration tests run the same pipeline the binary does.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use bmi_screen_data::JsonFileSource;
use bmi_screen_domain::entities::bmi::BmiCategory;
use bmi_screen_domain::services::batch::{count_category, BatchProcessor};

/// Input file read when no path argument is given
pub const DEFAULT_DATA_PATH: &str = "data/data.json";

/// Outcome of one batch run
#[derive(Debug)]
pub struct BatchSummary {
    /// Annotated records, in input order, skipped records omitted
    pub records: Vec<Value>,

    /// How many records were classified as Overweight
    pub overweight: usize,
}

/// Run the batch pipeline over the record file at `path`.
///
/// Source and record failures are logged and contained inside the pipeline,
/// so a bad file produces an empty summary rather than an error.
pub fn run(path: &Path) -> Result<BatchSummary> {
    let processor = BatchProcessor::new(JsonFileSource::new(path));
    let records = processor.process();
    let overweight = count_category(&records, BmiCategory::Overweight);

    info!(
        path = %path.display(),
        records = records.len(),
        overweight,
        "batch processed"
    );

    Ok(BatchSummary {
        records,
        overweight,
    })
}
