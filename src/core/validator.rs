use crate::domain::model::{Record, ValidationResult};
use crate::domain::ports::{Clock, RecordOperation, SystemClock};
use crate::utils::error::Result;
use serde_json::Value;

/// Keys every appointment must carry, in reporting order.
pub const REQUIRED_APPOINTMENT_FIELDS: [&str; 3] =
    ["customer_name", "appointment_date", "service_type"];

/// Checks appointment records for the presence of the required fields.
///
/// Only key membership is checked; values are never inspected, so a key
/// mapped to `null` still counts as present.
#[derive(Debug, Clone, Default)]
pub struct AppointmentValidator<C: Clock = SystemClock> {
    clock: C,
}

impl AppointmentValidator {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> AppointmentValidator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn validate(&self, record: &Record) -> ValidationResult {
        let missing_fields: Vec<String> = REQUIRED_APPOINTMENT_FIELDS
            .iter()
            .filter(|field| !record.contains(field))
            .map(|field| field.to_string())
            .collect();

        tracing::debug!(
            "Validated appointment with {} fields, {} missing",
            record.len(),
            missing_fields.len()
        );

        ValidationResult {
            valid: missing_fields.is_empty(),
            missing_fields,
            timestamp: self.clock.timestamp(),
        }
    }
}

impl<C: Clock> RecordOperation for AppointmentValidator<C> {
    fn name(&self) -> &str {
        "validate"
    }

    fn apply(&self, record: &Record) -> Result<Value> {
        Ok(serde_json::to_value(self.validate(record))?)
    }
}

/// Validates an appointment record against the system clock.
pub fn validate(record: &Record) -> ValidationResult {
    AppointmentValidator::new().validate(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::DateTime;
    use serde_json::json;

    fn fixed_clock() -> FixedClock {
        FixedClock(DateTime::parse_from_rfc3339("2025-12-01T09:30:00+02:00").unwrap())
    }

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_appointment_is_valid() {
        let validator = AppointmentValidator::with_clock(fixed_clock());
        let result = validator.validate(&record(json!({
            "customer_name": "John Doe",
            "appointment_date": "2025-12-01",
            "service_type": "Oil Change"
        })));

        assert!(result.valid);
        assert!(result.missing_fields.is_empty());
        assert_eq!(result.timestamp, "2025-12-01T09:30:00.000000+02:00");
    }

    #[test]
    fn test_missing_fields_follow_declaration_order() {
        let validator = AppointmentValidator::with_clock(fixed_clock());
        let result = validator.validate(&record(json!({
            "service_type": "Brake Inspection",
            "notes": "ignored"
        })));

        assert!(!result.valid);
        assert_eq!(result.missing_fields, vec!["customer_name", "appointment_date"]);
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let validator = AppointmentValidator::with_clock(fixed_clock());
        let result = validator.validate(&record(json!({
            "customer_name": null,
            "appointment_date": 0,
            "service_type": ["Oil Change"]
        })));

        assert!(result.valid);
    }

    #[test]
    fn test_apply_on_empty_record_reports_every_field() {
        let validator = AppointmentValidator::with_clock(fixed_clock());
        let value = validator.apply(&Record::new()).unwrap();

        assert_eq!(
            value["missing_fields"],
            json!(["customer_name", "appointment_date", "service_type"])
        );
        assert_eq!(value["valid"], json!(false));
        assert_eq!(value["timestamp"], json!("2025-12-01T09:30:00.000000+02:00"));
    }
}
