//! The selector: resolved patterns plus a lazily computed, cached walk.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rustc_hash::FxHashSet;

use super::defaults::default_excludes;
use super::patterns::{PatternRules, MATCH_ALL};
use super::strategy::ScanStrategy;
use super::types::{FileClass, ScanOutcome, ScanStats};
use super::walker::{WalkOptions, Walker};
use crate::errors::SelectionError;
use crate::traits::{Cancellable, NeverCancelled};

/// Everything needed to build a [`Selector`] besides the root.
#[derive(Debug, Clone)]
pub struct SelectorOptions {
    /// Include patterns; empty means "everything" (`**`).
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    /// Merge `default_excludes` into the exclude set.
    pub use_default_excludes: bool,
    /// Built-in exclude list. Replaceable so callers and tests can inject
    /// their own.
    pub default_excludes: Vec<String>,
    pub strategy: ScanStrategy,
    pub case_insensitive: bool,
    pub follow_links: bool,
    pub sort_entries: bool,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            excludes: Vec::new(),
            use_default_excludes: true,
            default_excludes: default_excludes(),
            strategy: ScanStrategy::default(),
            case_insensitive: false,
            follow_links: false,
            sort_entries: false,
        }
    }
}

/// Selects the files under a root that match the include patterns and none
/// of the exclude patterns.
///
/// Pattern sets are fixed at construction. The filesystem is walked at most
/// once per instance, on the first call to an accessor that needs files.
#[derive(Debug)]
pub struct Selector {
    root: PathBuf,
    included: Vec<String>,
    excluded: Vec<String>,
    rules: PatternRules,
    strategy: ScanStrategy,
    walk_options: WalkOptions,
    outcome: OnceLock<ScanOutcome>,
}

impl Selector {
    /// Build a fast-scan selector with the built-in default excludes.
    pub fn new<P, I, E>(
        root: P,
        includes: &[I],
        excludes: &[E],
        use_default_excludes: bool,
    ) -> Result<Self, SelectionError>
    where
        P: Into<PathBuf>,
        I: AsRef<str>,
        E: AsRef<str>,
    {
        let options = SelectorOptions {
            includes: includes.iter().map(|p| p.as_ref().to_string()).collect(),
            excludes: excludes.iter().map(|p| p.as_ref().to_string()).collect(),
            use_default_excludes,
            ..SelectorOptions::default()
        };
        Self::with_options(root, options)
    }

    /// Build a selector from full options. Fails only on a malformed pattern.
    pub fn with_options(
        root: impl Into<PathBuf>,
        options: SelectorOptions,
    ) -> Result<Self, SelectionError> {
        let included = resolve_includes(options.includes);
        let excluded = resolve_excludes(
            &options.excludes,
            &options.default_excludes,
            options.use_default_excludes,
        );
        let rules = PatternRules::compile(&included, &excluded, options.case_insensitive)?;

        Ok(Self {
            root: root.into(),
            included,
            excluded,
            rules,
            strategy: options.strategy,
            walk_options: WalkOptions {
                follow_links: options.follow_links,
                sort_entries: options.sort_entries,
            },
            outcome: OnceLock::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn strategy(&self) -> ScanStrategy {
        self.strategy
    }

    /// Include patterns in effect.
    pub fn included(&self) -> &[String] {
        &self.included
    }

    /// Exclude patterns in effect: user excludes first, then defaults,
    /// without duplicates.
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Root-relative paths of the selected files, in traversal order.
    /// Entries whose names aren't valid UTF-8 are never listed; they are
    /// counted in `ScanStats::entries_unreadable`.
    pub fn selected_files(&self) -> &[String] {
        &self.outcome().selected
    }

    /// Visited files rejected by an exclude pattern. Under the fast scan,
    /// files inside pruned directories are never visited and never listed.
    pub fn files_excluded(&self) -> &[String] {
        &self.outcome().excluded
    }

    pub fn stats(&self) -> &ScanStats {
        &self.outcome().stats
    }

    /// Would a file at this root-relative path be selected? Pure pattern
    /// check, no filesystem access.
    pub fn is_selected(&self, relative: &str) -> bool {
        self.rules.classify(relative) == FileClass::Selected
    }

    /// The cached walk, computed on first use.
    pub fn outcome(&self) -> &ScanOutcome {
        // The uncancellable walk has no error path.
        self.outcome
            .get_or_init(|| self.walk(&NeverCancelled).unwrap_or_default())
    }

    /// Like [`Selector::outcome`], but the walk stops with
    /// [`SelectionError::Cancelled`] once `cancel` fires. A cancelled walk
    /// caches nothing; a later call starts over.
    pub fn scan_with(&self, cancel: &dyn Cancellable) -> Result<&ScanOutcome, SelectionError> {
        if let Some(outcome) = self.outcome.get() {
            return Ok(outcome);
        }
        let outcome = self.walk(cancel)?;
        Ok(self.outcome.get_or_init(|| outcome))
    }

    fn walk(&self, cancel: &dyn Cancellable) -> Result<ScanOutcome, SelectionError> {
        Walker::new(
            &self.root,
            &self.rules,
            self.strategy.visitor(),
            self.walk_options,
        )
        .run(cancel)
    }
}

fn resolve_includes(includes: Vec<String>) -> Vec<String> {
    if includes.is_empty() {
        vec![MATCH_ALL.to_string()]
    } else {
        includes
    }
}

fn resolve_excludes(user: &[String], defaults: &[String], use_defaults: bool) -> Vec<String> {
    let defaults: &[String] = if use_defaults { defaults } else { &[] };
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    user.iter()
        .chain(defaults)
        .filter(|pattern| seen.insert(pattern.as_str()))
        .cloned()
        .collect()
}
