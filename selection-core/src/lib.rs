//! selection-core: choose the files under a root that downstream tools
//! (license-header checks and the like) should process.
//!
//! - Selection: include/exclude pattern resolution, built-in default
//!   excludes, fast (pruning) and full traversal strategies
//! - Config: TOML + environment layered selector configuration
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Tracing: `SELECTION_LOG`-driven subscriber setup

pub mod config;
pub mod errors;
pub mod selection;
pub mod traits;
pub mod tracing;

// Re-exports for convenience
pub use config::{ConfigOverrides, SelectionConfig};
pub use errors::{ConfigError, PatternRole, SelectionError, SelectionErrorCode};
pub use selection::{
    default_excludes, FileClass, ScanOutcome, ScanStats, ScanStrategy, Selector,
    SelectorOptions, DEFAULT_EXCLUDES, MATCH_ALL,
};
pub use traits::{Cancellable, CancellationToken};
