pub mod config;
pub mod core;
pub mod demo;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{BatchArgs, CliConfig, Command};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::engine::{BatchEngine, RecordBatch};
pub use crate::core::{
    enrich, validate, AppointmentValidator, Clock, FixedClock, Record, SystemClock,
    ValidationResult, VehicleEnricher,
};
pub use utils::error::{RecordError, Result};
