use crate::domain::model::Record;
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use serde_json::Value;

/// Source of the current time for timestamped outputs.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current time as RFC 3339 with microseconds and the zone offset.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant. Useful for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// A per-record operation the batch engine can drive.
pub trait RecordOperation: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, record: &Record) -> Result<Value>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn pretty_output(&self) -> bool;
    fn log_filter(&self) -> Option<&str>;
}
