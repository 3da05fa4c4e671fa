use crate::domain::model::{render_value, Record};
use crate::domain::ports::{Clock, RecordOperation, SystemClock};
use crate::utils::error::Result;
use serde_json::Value;

pub const DISPLAY_NAME_FIELD: &str = "display_name";
pub const PROCESSED_AT_FIELD: &str = "processed_at";

/// Adds derived fields to vehicle records.
///
/// The input is never touched; every call works on a fresh copy.
#[derive(Debug, Clone, Default)]
pub struct VehicleEnricher<C: Clock = SystemClock> {
    clock: C,
}

impl VehicleEnricher {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> VehicleEnricher<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn enrich(&self, record: &Record) -> Record {
        let mut enriched = record.clone();

        if let Some(display_name) = display_name(record) {
            tracing::debug!("Derived display name: {}", display_name);
            enriched.insert(DISPLAY_NAME_FIELD, display_name);
        }

        enriched.insert(PROCESSED_AT_FIELD, self.clock.timestamp());
        enriched
    }
}

/// `"{year} {make} {model}"`, only when all three keys are present.
pub fn display_name(record: &Record) -> Option<String> {
    let year = record.get("year")?;
    let make = record.get("make")?;
    let model = record.get("model")?;

    Some(format!(
        "{} {} {}",
        render_value(year),
        render_value(make),
        render_value(model)
    ))
}

impl<C: Clock> RecordOperation for VehicleEnricher<C> {
    fn name(&self) -> &str {
        "enrich"
    }

    fn apply(&self, record: &Record) -> Result<Value> {
        Ok(self.enrich(record).to_value())
    }
}

/// Enriches a vehicle record against the system clock.
pub fn enrich(record: &Record) -> Record {
    VehicleEnricher::new().enrich(record)
}
