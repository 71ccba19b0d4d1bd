//! Ant-style glob patterns compiled into include/exclude rules.
//!
//! Patterns are matched against root-relative paths using `/` as the only
//! separator: `**` spans any number of whole segments, `*` and `?` never
//! cross a `/`.

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use super::types::FileClass;
use crate::errors::{PatternRole, SelectionError};

/// Include pattern used when the caller supplies none.
pub const MATCH_ALL: &str = "**";

const SUBTREE_SUFFIX: &str = "/**";

/// Rewrite a raw pattern into the form the matcher expects.
///
/// Backslashes become `/`, leading `./` and `/` are dropped (patterns are
/// always root-relative), and a trailing `/` means "everything below".
pub fn normalize_pattern(raw: &str) -> String {
    let mut pattern = raw.replace('\\', "/");
    loop {
        if let Some(rest) = pattern.strip_prefix("./") {
            pattern = rest.to_string();
        } else if let Some(rest) = pattern.strip_prefix('/') {
            pattern = rest.to_string();
        } else {
            break;
        }
    }
    if pattern.ends_with('/') {
        pattern.push_str("**");
    }
    pattern
}

/// Compiled include and exclude rules shared by every traversal strategy.
#[derive(Debug, Clone)]
pub struct PatternRules {
    includes: GlobSet,
    excludes: GlobSet,
    /// Directory-level forms of the excludes ending in `/**`.
    prune: GlobSet,
}

impl PatternRules {
    /// Compile the resolved pattern lists. Fails on the first malformed
    /// pattern, naming it.
    pub fn compile(
        includes: &[String],
        excludes: &[String],
        case_insensitive: bool,
    ) -> Result<Self, SelectionError> {
        let mut include_set = GlobSetBuilder::new();
        for raw in includes {
            let normalized = normalize_pattern(raw);
            include_set.add(build_glob(
                raw,
                &normalized,
                PatternRole::Include,
                case_insensitive,
            )?);
        }

        let mut exclude_set = GlobSetBuilder::new();
        let mut prune_set = GlobSetBuilder::new();
        for raw in excludes {
            let normalized = normalize_pattern(raw);
            exclude_set.add(build_glob(
                raw,
                &normalized,
                PatternRole::Exclude,
                case_insensitive,
            )?);

            if let Some(dir_pattern) = normalized.strip_suffix(SUBTREE_SUFFIX) {
                if !dir_pattern.is_empty() {
                    prune_set.add(build_glob(
                        raw,
                        dir_pattern,
                        PatternRole::Exclude,
                        case_insensitive,
                    )?);
                }
            }
        }

        Ok(Self {
            includes: build_set(include_set, includes, PatternRole::Include)?,
            excludes: build_set(exclude_set, excludes, PatternRole::Exclude)?,
            prune: build_set(prune_set, excludes, PatternRole::Exclude)?,
        })
    }

    /// Does the root-relative path match at least one include pattern?
    pub fn is_included(&self, relative: &str) -> bool {
        self.includes.is_match(relative)
    }

    /// Does the root-relative path match any exclude pattern?
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.excludes.is_match(relative)
    }

    /// Classify a file by its root-relative path.
    pub fn classify(&self, relative: &str) -> FileClass {
        if !self.is_included(relative) {
            FileClass::Ignored
        } else if self.is_excluded(relative) {
            FileClass::Excluded
        } else {
            FileClass::Selected
        }
    }

    /// True when a `/**` exclude covers the whole subtree under this
    /// directory, so none of its files can ever be selected.
    pub fn prunes(&self, relative_dir: &str) -> bool {
        self.prune.is_match(relative_dir)
    }

    /// Number of excludes usable for directory pruning.
    pub fn prune_rule_count(&self) -> usize {
        self.prune.len()
    }
}

fn build_glob(
    raw: &str,
    normalized: &str,
    role: PatternRole,
    case_insensitive: bool,
) -> Result<Glob, SelectionError> {
    GlobBuilder::new(normalized)
        .literal_separator(true)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| SelectionError::InvalidPattern {
            pattern: raw.to_string(),
            role,
            source,
        })
}

fn build_set(
    builder: GlobSetBuilder,
    patterns: &[String],
    role: PatternRole,
) -> Result<GlobSet, SelectionError> {
    builder.build().map_err(|source| SelectionError::InvalidPattern {
        pattern: patterns.join(","),
        role,
        source,
    })
}
