pub mod engine;
pub mod enricher;
pub mod validator;

pub use crate::domain::model::{Record, ValidationResult};
pub use crate::domain::ports::{
    Clock, ConfigProvider, FixedClock, RecordOperation, Storage, SystemClock,
};
pub use crate::utils::error::Result;
pub use enricher::{enrich, VehicleEnricher};
pub use validator::{validate, AppointmentValidator};
