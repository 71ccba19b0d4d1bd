//! Selector errors.

use std::fmt;

use super::config_error::ConfigError;
use super::error_code::{self, SelectionErrorCode};

/// Which pattern list an offending pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRole {
    Include,
    Exclude,
}

impl fmt::Display for PatternRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
        }
    }
}

/// Errors that can occur while building or running a selector.
///
/// Traversal I/O problems are not represented here: unreadable entries are
/// skipped and only show up in the scan statistics.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid {role} pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        role: PatternRole,
        source: globset::Error,
    },

    #[error("Selection scan cancelled")]
    Cancelled,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SelectionErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            Self::Cancelled => error_code::CANCELLED,
            Self::Config(_) => error_code::CONFIG_ERROR,
        }
    }
}
