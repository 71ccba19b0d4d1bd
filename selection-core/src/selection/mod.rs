//! Selection subsystem: include/exclude resolution, default excludes, and
//! the two traversal strategies that produce the selected file list.

pub mod defaults;
pub mod patterns;
pub mod selector;
pub mod strategy;
pub mod types;
pub mod walker;

pub use defaults::{default_excludes, DEFAULT_EXCLUDES};
pub use patterns::{normalize_pattern, PatternRules, MATCH_ALL};
pub use selector::{Selector, SelectorOptions};
pub use strategy::{FastScan, FullScan, ScanStrategy, TraversalStrategy};
pub use types::{FileClass, ScanOutcome, ScanStats};
pub use walker::WalkOptions;
