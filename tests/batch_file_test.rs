use anyhow::Result;
use autoshop_records::{
    AppointmentValidator, BatchEngine, FixedClock, LocalStorage, RecordError, TomlConfig,
    VehicleEnricher,
};
use chrono::DateTime;
use serde_json::{json, Value};
use tempfile::TempDir;

fn clock() -> FixedClock {
    FixedClock(DateTime::parse_from_rfc3339("2025-12-01T09:30:00+00:00").unwrap())
}

#[test]
fn test_enrich_file_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("vehicles.json"),
        serde_json::to_vec(&json!([
            {"year": 2020, "make": "Toyota", "model": "Camry", "vin": "1HGBH41JXMN109186"},
            {"vin": "XYZ"}
        ]))?,
    )?;

    let engine = BatchEngine::new(LocalStorage::new(temp_dir.path()), TomlConfig::default());
    engine.run(
        &VehicleEnricher::with_clock(clock()),
        "vehicles.json",
        Some("out/enriched.json"),
    )?;

    let written: Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("out/enriched.json"))?)?;
    assert_eq!(
        written,
        json!([
            {
                "year": 2020,
                "make": "Toyota",
                "model": "Camry",
                "vin": "1HGBH41JXMN109186",
                "display_name": "2020 Toyota Camry",
                "processed_at": "2025-12-01T09:30:00.000000+00:00"
            },
            {"vin": "XYZ", "processed_at": "2025-12-01T09:30:00.000000+00:00"}
        ])
    );
    Ok(())
}

#[test]
fn test_compact_output_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("records.toml");
    std::fs::write(&config_path, "[output]\npretty = false\n")?;
    std::fs::write(
        temp_dir.path().join("appointments.json"),
        r#"{"customer_name": "Jane"}"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    let engine = BatchEngine::new(LocalStorage::new(temp_dir.path()), config);
    let rendered = engine.run(
        &AppointmentValidator::with_clock(clock()),
        "appointments.json",
        None,
    )?;

    assert!(!rendered.contains('\n'));
    let result: Value = serde_json::from_str(&rendered)?;
    assert_eq!(
        result,
        json!({
            "valid": false,
            "missing_fields": ["appointment_date", "service_type"],
            "timestamp": "2025-12-01T09:30:00.000000+00:00"
        })
    );
    Ok(())
}

#[test]
fn test_array_with_non_object_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("bad.json"), r#"[{"vin": "A"}, "B"]"#)?;

    let engine = BatchEngine::new(LocalStorage::new(temp_dir.path()), TomlConfig::default());
    let err = engine
        .run(&VehicleEnricher::with_clock(clock()), "bad.json", None)
        .unwrap_err();

    assert!(matches!(err, RecordError::InvalidInput { .. }));
    assert!(err.user_friendly_message().contains("element 1"));
    Ok(())
}
