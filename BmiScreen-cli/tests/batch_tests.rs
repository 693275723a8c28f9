use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use bmi_screen_cli::run;

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_batch_is_annotated_in_order() {
    initialize();

    let file = write_fixture(
        r#"[
        {"Gender": "Male", "HeightCm": 178, "WeightKg": 75},
        {"Gender": "Female", "HeightCm": 152, "WeightKg": 55},
        {"Gender": "Male", "HeightCm": 196, "WeightKg": 125},
        {"Gender": "Female", "HeightCm": 180, "WeightKg": 62},
        {"Gender": "Female", "HeightCm": 158, "WeightKg": 55},
        {"Gender": "Female", "HeightCm": 160, "WeightKg": 90}
    ]"#,
    );

    let summary = run(file.path()).unwrap();
    let expected = vec![
        json!({"Gender": "Male", "HeightCm": 178, "WeightKg": 75, "BMI": 23.67,
               "BMICategory": "Normal weight", "HealthRisk": "Low risk"}),
        json!({"Gender": "Female", "HeightCm": 152, "WeightKg": 55, "BMI": 23.81,
               "BMICategory": "Normal weight", "HealthRisk": "Low risk"}),
        json!({"Gender": "Male", "HeightCm": 196, "WeightKg": 125, "BMI": 32.54,
               "BMICategory": "Moderately obese", "HealthRisk": "Medium risk"}),
        json!({"Gender": "Female", "HeightCm": 180, "WeightKg": 62, "BMI": 19.14,
               "BMICategory": "Normal weight", "HealthRisk": "Low risk"}),
        json!({"Gender": "Female", "HeightCm": 158, "WeightKg": 55, "BMI": 22.03,
               "BMICategory": "Normal weight", "HealthRisk": "Low risk"}),
        json!({"Gender": "Female", "HeightCm": 160, "WeightKg": 90, "BMI": 35.16,
               "BMICategory": "Severely obese", "HealthRisk": "High risk"}),
    ];

    assert_eq!(summary.records, expected);
    assert_eq!(summary.overweight, 0);
}

#[test]
fn test_record_missing_weight_is_skipped() {
    initialize();

    let file = write_fixture(
        r#"[
        {"Gender": "Male", "HeightCm": 178, "WeightKg": 75},
        {"Gender": "Female", "HeightCm": 160},
        {"Gender": "Female", "HeightCm": 160, "WeightKg": 90}
    ]"#,
    );

    let summary = run(file.path()).unwrap();
    assert_eq!(summary.records.len(), 2);
    assert_eq!(summary.records[0]["HeightCm"], 178);
    assert_eq!(summary.records[1]["HeightCm"], 160);
    assert_eq!(summary.records[1]["BMICategory"], "Severely obese");
}

#[test]
fn test_wrong_typed_measurements_are_skipped() {
    initialize();

    let file = write_fixture(
        r#"[
        {"Gender": "Male", "HeightCm": 178.5, "WeightKg": 75},
        {"Gender": "Male", "HeightCm": 178, "WeightKg": "75"},
        {"Gender": "Male", "HeightCm": 178, "WeightKg": 75}
    ]"#,
    );

    let summary = run(file.path()).unwrap();
    assert_eq!(summary.records.len(), 1);
    assert_eq!(summary.records[0]["BMI"], json!(23.67));
}

#[test]
fn test_extra_fields_pass_through() {
    initialize();

    let file = write_fixture(
        r#"[{"Gender": "Female", "HeightCm": 166, "WeightKg": 82, "Name": "Sam"}]"#,
    );

    let summary = run(file.path()).unwrap();
    assert_eq!(summary.records.len(), 1);
    assert_eq!(summary.records[0]["Name"], "Sam");
    assert_eq!(summary.records[0]["BMICategory"], "Overweight");
}

#[test]
fn test_corrupted_json_yields_empty_batch() {
    initialize();

    let file = write_fixture(r#"[{"Gender": "Male", "HeightCm": 1"#);
    let summary = run(file.path()).unwrap();
    assert!(summary.records.is_empty());
    assert_eq!(summary.overweight, 0);
}

#[test]
fn test_missing_file_yields_empty_batch() {
    initialize();

    let summary = run(std::path::Path::new("test_data/does_not_exist.json")).unwrap();
    assert!(summary.records.is_empty());
}

#[test]
fn test_top_level_object_yields_empty_batch() {
    initialize();

    let file = write_fixture(r#"{"Gender": "Male", "HeightCm": 178, "WeightKg": 75}"#);
    let summary = run(file.path()).unwrap();
    assert!(summary.records.is_empty());
}

#[test]
fn test_overweight_count() {
    initialize();

    let file = write_fixture(
        r#"[
        {"Gender": "Female", "HeightCm": 166, "WeightKg": 82},
        {"Gender": "Male", "HeightCm": 171, "WeightKg": 96},
        {"Gender": "Male", "HeightCm": 171, "WeightKg": 81},
        {"Gender": "Male", "HeightCm": 178, "WeightKg": 75}
    ]"#,
    );

    let summary = run(file.path()).unwrap();
    assert_eq!(summary.records.len(), 4);
    assert_eq!(summary.overweight, 2);
}
