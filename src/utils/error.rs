use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl RecordError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RecordError::IoError(e) => format!("Could not read or write a file: {}", e),
            RecordError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            RecordError::ConfigParseError(e) => format!("Config file is not valid TOML: {}", e),
            RecordError::ConfigError { message } => format!("Configuration problem: {}", message),
            RecordError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            RecordError::InvalidInput { message } => format!("Unusable input: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecordError::IoError(_) => "Check that the path exists and is readable/writable",
            RecordError::SerializationError(_) | RecordError::InvalidInput { .. } => {
                "Provide a JSON object or an array of JSON objects"
            }
            RecordError::ConfigParseError(_)
            | RecordError::ConfigError { .. }
            | RecordError::InvalidConfigValueError { .. } => {
                "Fix the config file or run without --config to use defaults"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
