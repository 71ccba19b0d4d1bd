//! Selection data types: FileClass, ScanStats, ScanOutcome.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a visited file was classified against the pattern rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileClass {
    /// Matches an include and no exclude.
    Selected,
    /// Matches an include but was rejected by an exclude.
    Excluded,
    /// Matches no include; dropped without being counted as excluded.
    Ignored,
}

/// Counters collected during one walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files reached by the walk (pruned subtrees never count)
    pub files_visited: usize,
    pub files_selected: usize,
    pub files_excluded: usize,
    pub files_ignored: usize,
    /// Directories descended into, root excluded
    pub dirs_visited: usize,
    /// Directories skipped with their whole subtree
    pub dirs_pruned: usize,
    /// Entries the walk could not read (skipped, never fatal)
    pub entries_unreadable: usize,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

/// Result of walking a root once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Root-relative paths, `/`-separated, in traversal order.
    pub selected: Vec<String>,
    /// Visited files rejected by an exclude pattern.
    pub excluded: Vec<String>,
    pub stats: ScanStats,
}

// Custom serialization for Duration as milliseconds
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
