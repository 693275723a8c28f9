use std::env;
use std::path::PathBuf;

use bmi_screen_cli::{run, DEFAULT_DATA_PATH};
use bmi_screen_domain::entities::bmi::BmiCategory;

fn main() -> anyhow::Result<()> {
    // Initialize logging with environment settings
    tracing_subscriber::fmt::init();

    // Input path from the first argument, or the default relative path
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let summary = run(&path)?;

    println!(
        "{} person(s) are classified as being {}",
        summary.overweight,
        BmiCategory::Overweight.to_string()
    );

    Ok(())
}
