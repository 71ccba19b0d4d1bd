//! Traversal strategies: prune-first (fast) and filter-after (full).
//!
//! Both strategies classify files through [`PatternRules::classify`]; they
//! only disagree on which directories get descended into.

use serde::{Deserialize, Serialize};

use super::patterns::PatternRules;

/// Decides, per directory, whether the walk descends into it.
pub trait TraversalStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Called before descending into `relative_dir` (root-relative,
    /// `/`-separated). Returning false skips the whole subtree.
    fn should_descend(&self, rules: &PatternRules, relative_dir: &str) -> bool;
}

/// Skips directories whose entire subtree is covered by an exclude.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastScan;

impl TraversalStrategy for FastScan {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn should_descend(&self, rules: &PatternRules, relative_dir: &str) -> bool {
        !rules.prunes(relative_dir)
    }
}

/// Visits every directory and filters files afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullScan;

impl TraversalStrategy for FullScan {
    fn name(&self) -> &'static str {
        "full"
    }

    fn should_descend(&self, _rules: &PatternRules, _relative_dir: &str) -> bool {
        true
    }
}

/// Serializable strategy selector used by options and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    #[default]
    #[serde(alias = "FAST", alias = "Fast")]
    Fast,
    #[serde(alias = "FULL", alias = "Full")]
    Full,
}

impl ScanStrategy {
    /// The visitor implementing this strategy.
    pub fn visitor(self) -> &'static dyn TraversalStrategy {
        match self {
            Self::Fast => &FastScan,
            Self::Full => &FullScan,
        }
    }

    /// Parse `"fast"` / `"full"` (case-insensitive, surrounding whitespace
    /// ignored). TOML accepts the same lowercase, uppercase and capitalized
    /// spellings through serde aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fast" => Some(Self::Fast),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}
