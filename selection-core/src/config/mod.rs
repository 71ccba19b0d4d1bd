//! Configuration for selection.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod selection_config;

pub use selection_config::{ConfigOverrides, SelectionConfig, PROJECT_CONFIG_FILE};
