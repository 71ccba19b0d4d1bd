//! SelectionErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers can match on without parsing messages.
pub trait SelectionErrorCode {
    /// Returns the error code string (e.g., "INVALID_PATTERN").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const CANCELLED: &str = "CANCELLED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
