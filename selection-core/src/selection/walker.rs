//! Depth-first walk that feeds every reachable file through the pattern rules.
//!
//! The walk is iterator-driven, so the cancellation token is checked between
//! entries rather than inside a recursive call chain. Unreadable entries are
//! skipped and counted; the walk never fails because of I/O.

use std::path::{Component, Path};
use std::time::Instant;

use tracing::{debug, info, trace};
use walkdir::{DirEntry, WalkDir};

use super::patterns::PatternRules;
use super::strategy::TraversalStrategy;
use super::types::{FileClass, ScanOutcome, ScanStats};
use crate::errors::SelectionError;
use crate::traits::Cancellable;

/// Traversal knobs that don't affect matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    pub follow_links: bool,
    pub sort_entries: bool,
}

/// One-shot walker over a root directory.
pub struct Walker<'a> {
    root: &'a Path,
    rules: &'a PatternRules,
    strategy: &'a dyn TraversalStrategy,
    options: WalkOptions,
}

impl<'a> Walker<'a> {
    pub fn new(
        root: &'a Path,
        rules: &'a PatternRules,
        strategy: &'a dyn TraversalStrategy,
        options: WalkOptions,
    ) -> Self {
        Self {
            root,
            rules,
            strategy,
            options,
        }
    }

    /// Walk the root and classify every visited file.
    ///
    /// A root that is missing or not a directory yields an empty outcome.
    pub fn run(&self, cancel: &dyn Cancellable) -> Result<ScanOutcome, SelectionError> {
        let start = Instant::now();
        let mut outcome = ScanOutcome::default();

        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "root is not a readable directory, nothing to select");
            return Ok(outcome);
        }

        let mut walker = WalkDir::new(self.root)
            .min_depth(1)
            .follow_links(self.options.follow_links);
        if self.options.sort_entries {
            walker = walker.sort_by_file_name();
        }
        let mut entries = walker.into_iter();

        loop {
            if cancel.is_cancelled() {
                debug!(strategy = self.strategy.name(), "selection walk cancelled");
                return Err(SelectionError::Cancelled);
            }

            let entry = match entries.next() {
                None => break,
                Some(Ok(entry)) => entry,
                Some(Err(_)) => {
                    outcome.stats.entries_unreadable += 1;
                    continue;
                }
            };

            // Non-UTF-8 names can't be reported as `/`-joined strings that
            // still open under root; skip them (and their subtree).
            if entry.file_name().to_str().is_none() {
                outcome.stats.entries_unreadable += 1;
                if entry.file_type().is_dir() {
                    entries.skip_current_dir();
                }
                continue;
            }

            let Some(relative) = relative_path(self.root, entry.path()) else {
                continue;
            };

            if entry.file_type().is_dir() {
                if self.strategy.should_descend(self.rules, &relative) {
                    outcome.stats.dirs_visited += 1;
                } else {
                    debug!(dir = %relative, "pruned excluded subtree");
                    outcome.stats.dirs_pruned += 1;
                    entries.skip_current_dir();
                }
                continue;
            }

            if !is_file(&entry) {
                continue;
            }

            self.record(&mut outcome, relative);
        }

        outcome.stats.duration = start.elapsed();
        log_summary(self.strategy.name(), &outcome.stats);
        Ok(outcome)
    }

    fn record(&self, outcome: &mut ScanOutcome, relative: String) {
        let class = self.rules.classify(&relative);
        trace!(file = %relative, ?class, "classified");

        let stats = &mut outcome.stats;
        stats.files_visited += 1;
        match class {
            FileClass::Selected => {
                stats.files_selected += 1;
                outcome.selected.push(relative);
            }
            FileClass::Excluded => {
                stats.files_excluded += 1;
                outcome.excluded.push(relative);
            }
            FileClass::Ignored => stats.files_ignored += 1,
        }
    }
}

/// Regular files, plus symlinks that resolve to one when links aren't followed.
fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Root-relative path joined with `/`, whatever the platform separator.
/// `None` outside root, for root itself, or when a component isn't UTF-8.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut out = String::new();
    for component in relative.components() {
        if let Component::Normal(name) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(name.to_str()?);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

fn log_summary(strategy: &str, stats: &ScanStats) {
    info!(
        strategy,
        selected = stats.files_selected,
        excluded = stats.files_excluded,
        visited = stats.files_visited,
        dirs_pruned = stats.dirs_pruned,
        "selection walk completed in {:?}",
        stats.duration
    );
}
