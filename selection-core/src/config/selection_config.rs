//! Selector configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, SelectionError};
use crate::selection::{default_excludes, ScanStrategy, Selector, SelectorOptions};

/// Project-level config file, looked up in the selection root.
pub const PROJECT_CONFIG_FILE: &str = "selection.toml";

/// Selector configuration.
///
/// Resolution order (highest priority first):
/// 1. Caller overrides (applied via `apply_overrides`)
/// 2. Environment variables (`SELECTION_*`)
/// 3. Project config (`selection.toml` in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Include patterns. Empty means everything.
    pub includes: Vec<String>,
    /// User exclude patterns.
    pub excludes: Vec<String>,
    /// Merge the built-in default excludes. Default: true.
    pub use_default_excludes: Option<bool>,
    /// Traversal strategy. Default: fast.
    pub strategy: Option<ScanStrategy>,
    /// Case-insensitive matching. Default: false.
    pub case_insensitive: Option<bool>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_links: Option<bool>,
    /// Visit siblings in file-name order. Default: false.
    pub sort_entries: Option<bool>,
}

/// Overrides supplied by the embedding tool (highest priority).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub use_default_excludes: Option<bool>,
    pub strategy: Option<ScanStrategy>,
    pub case_insensitive: Option<bool>,
    pub follow_links: Option<bool>,
    pub sort_entries: Option<bool>,
}

impl SelectionConfig {
    /// Load configuration for `root` with layered resolution.
    ///
    /// A missing project file is not an error; an unreadable or invalid one is.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Reject blank patterns; they would silently match nothing.
    pub fn validate(config: &SelectionConfig) -> Result<(), ConfigError> {
        let lists = [("includes", &config.includes), ("excludes", &config.excludes)];
        for (field, patterns) in lists {
            if let Some(index) = patterns.iter().position(|p| p.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("{field}[{index}]"),
                    message: "pattern must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn effective_use_default_excludes(&self) -> bool {
        self.use_default_excludes.unwrap_or(true)
    }

    pub fn effective_strategy(&self) -> ScanStrategy {
        self.strategy.unwrap_or_default()
    }

    /// Selector options described by this config.
    pub fn to_selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            includes: self.includes.clone(),
            excludes: self.excludes.clone(),
            use_default_excludes: self.effective_use_default_excludes(),
            default_excludes: default_excludes(),
            strategy: self.effective_strategy(),
            case_insensitive: self.case_insensitive.unwrap_or(false),
            follow_links: self.follow_links.unwrap_or(false),
            sort_entries: self.sort_entries.unwrap_or(false),
        }
    }

    /// Build a selector rooted at `root`.
    pub fn into_selector(self, root: impl Into<PathBuf>) -> Result<Selector, SelectionError> {
        Selector::with_options(root, self.to_selector_options())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut SelectionConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            },
        })?;

        let file_config: SelectionConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut SelectionConfig, other: &SelectionConfig) {
        if !other.includes.is_empty() {
            base.includes = other.includes.clone();
        }
        if !other.excludes.is_empty() {
            base.excludes = other.excludes.clone();
        }
        if other.use_default_excludes.is_some() {
            base.use_default_excludes = other.use_default_excludes;
        }
        if other.strategy.is_some() {
            base.strategy = other.strategy;
        }
        if other.case_insensitive.is_some() {
            base.case_insensitive = other.case_insensitive;
        }
        if other.follow_links.is_some() {
            base.follow_links = other.follow_links;
        }
        if other.sort_entries.is_some() {
            base.sort_entries = other.sort_entries;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern lists are comma-separated: `SELECTION_EXCLUDES=**/gen/**,*.bak`.
    fn apply_env_overrides(config: &mut SelectionConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("SELECTION_INCLUDES") {
            config.includes = split_patterns(&val);
        }
        if let Ok(val) = std::env::var("SELECTION_EXCLUDES") {
            config.excludes = split_patterns(&val);
        }
        if let Ok(val) = std::env::var("SELECTION_USE_DEFAULT_EXCLUDES") {
            config.use_default_excludes =
                Some(parse_bool("SELECTION_USE_DEFAULT_EXCLUDES", &val)?);
        }
        if let Ok(val) = std::env::var("SELECTION_CASE_INSENSITIVE") {
            config.case_insensitive = Some(parse_bool("SELECTION_CASE_INSENSITIVE", &val)?);
        }
        if let Ok(val) = std::env::var("SELECTION_FOLLOW_LINKS") {
            config.follow_links = Some(parse_bool("SELECTION_FOLLOW_LINKS", &val)?);
        }
        if let Ok(val) = std::env::var("SELECTION_SORT_ENTRIES") {
            config.sort_entries = Some(parse_bool("SELECTION_SORT_ENTRIES", &val)?);
        }
        if let Ok(val) = std::env::var("SELECTION_STRATEGY") {
            let strategy = ScanStrategy::parse(&val).ok_or_else(|| ConfigError::InvalidValue {
                field: "SELECTION_STRATEGY".to_string(),
                message: format!("expected 'fast' or 'full', got '{val}'"),
            })?;
            config.strategy = Some(strategy);
        }
        Ok(())
    }

    /// Apply caller overrides (highest priority).
    fn apply_overrides(config: &mut SelectionConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.includes {
            config.includes = v.clone();
        }
        if let Some(ref v) = overrides.excludes {
            config.excludes = v.clone();
        }
        if let Some(v) = overrides.use_default_excludes {
            config.use_default_excludes = Some(v);
        }
        if let Some(v) = overrides.strategy {
            config.strategy = Some(v);
        }
        if let Some(v) = overrides.case_insensitive {
            config.case_insensitive = Some(v);
        }
        if let Some(v) = overrides.follow_links {
            config.follow_links = Some(v);
        }
        if let Some(v) = overrides.sort_entries {
            config.sort_entries = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn split_patterns(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    value
        .trim()
        .parse::<bool>()
        .map_err(|_| ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("expected 'true' or 'false', got '{value}'"),
        })
}
