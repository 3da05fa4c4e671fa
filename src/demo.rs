//! Sample records and the text report printed by the `demo` command.

use crate::core::{AppointmentValidator, Clock, Record, VehicleEnricher};
use crate::utils::error::Result;
use serde_json::json;

pub fn sample_appointment() -> Record {
    Record::from_iter([
        ("customer_name", json!("John Doe")),
        ("appointment_date", json!("2025-12-01")),
        ("service_type", json!("Oil Change")),
    ])
}

pub fn sample_vehicle() -> Record {
    Record::from_iter([
        ("year", json!(2020)),
        ("make", json!("Toyota")),
        ("model", json!("Camry")),
        ("vin", json!("1HGBH41JXMN109186")),
    ])
}

pub fn report<C: Clock + Copy>(clock: C) -> Result<String> {
    let validation = AppointmentValidator::with_clock(clock).validate(&sample_appointment());
    let vehicle = VehicleEnricher::with_clock(clock).enrich(&sample_vehicle());

    Ok(format!(
        "Appointment Validation:\n{}\n\nVehicle Data Processing:\n{}",
        serde_json::to_string_pretty(&validation)?,
        serde_json::to_string_pretty(&vehicle)?
    ))
}
