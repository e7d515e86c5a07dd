//! Configuration errors.

use super::error_code::{self, WardenErrorCode};

/// Errors that can occur during threshold configuration loading and
/// validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error: {message}")]
    ParseError { message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl WardenErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
