//! WardenErrorCode trait for structured error reporting.

/// Trait for converting Warden errors to stable error-code strings.
/// Every error enum implements this so the downstream harness can match
/// on codes instead of message text.
pub trait WardenErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the reporting boundary.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
