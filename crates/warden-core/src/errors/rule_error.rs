//! Rule evaluation errors.
//!
//! These are surfaced to the caller before any entity is processed.
//! Per-entity data-quality failures are not errors; they are reported as
//! violations so one bad record cannot abort the rest of the batch.

use super::config_error::ConfigError;
use super::error_code::{self, WardenErrorCode};

/// Errors that can occur when a rule evaluation is invoked.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Missing required parameter for rule {rule}: {param}")]
    MissingParameter { rule: String, param: String },
}

impl WardenErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::MissingParameter { .. } => error_code::RULE_ERROR,
        }
    }
}
