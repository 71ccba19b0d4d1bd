//! Error handling for selection.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod selection_error;

pub use config_error::ConfigError;
pub use error_code::SelectionErrorCode;
pub use selection_error::{PatternRole, SelectionError};
