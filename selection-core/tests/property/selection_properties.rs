use std::fs;

use proptest::prelude::*;
use selection_core::{ScanStrategy, Selector, SelectorOptions};
use tempfile::TempDir;

const SEGMENTS: &[&str] = &["src", "target", "lib", "build", "gen"];
const FILES: &[&str] = &["a.txt", "b.rs", "c.txt", "target"];

fn path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(SEGMENTS), 0..4),
        prop::sample::select(FILES),
    )
        .prop_map(|(dirs, file)| {
            let mut parts: Vec<&str> = dirs;
            parts.push(file);
            parts.join("/")
        })
}

fn build_tree(paths: &[String]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for path in paths {
        let full = dir.path().join(path);
        // A generated file path may collide with a generated directory.
        if full.exists() || full.parent().is_some_and(|p| p.is_file()) {
            continue;
        }
        if fs::create_dir_all(full.parent().unwrap()).is_ok() {
            let _ = fs::write(&full, "");
        }
    }
    dir
}

fn selector(dir: &TempDir, excludes: &[&str], strategy: ScanStrategy) -> Selector {
    Selector::with_options(
        dir.path(),
        SelectorOptions {
            includes: vec!["**/*.txt".into(), "**/target".into()],
            excludes: excludes.iter().map(|s| s.to_string()).collect(),
            use_default_excludes: false,
            strategy,
            ..Default::default()
        },
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fast_and_full_scan_select_the_same_files(
        paths in prop::collection::vec(path_strategy(), 1..20),
        excludes in prop::sample::subsequence(
            vec!["**/target/**", "build/", "**/gen", "**/c.txt", "lib/**"],
            0..4,
        ),
    ) {
        let dir = build_tree(&paths);
        let fast = selector(&dir, &excludes, ScanStrategy::Fast);
        let full = selector(&dir, &excludes, ScanStrategy::Full);

        let mut fast_selected = fast.selected_files().to_vec();
        let mut full_selected = full.selected_files().to_vec();
        fast_selected.sort();
        full_selected.sort();
        prop_assert_eq!(fast_selected, full_selected);

        // Fast scan only ever reports a subset of the full scan's rejections.
        for file in fast.files_excluded() {
            prop_assert!(full.files_excluded().contains(file));
        }
    }

    #[test]
    fn pattern_resolution_is_idempotent(
        excludes in prop::collection::vec("[a-z]{1,6}(/\\*\\*)?", 0..6),
        use_defaults in any::<bool>(),
    ) {
        let selector = Selector::new("/nonexistent", &["**"], &excludes, use_defaults).unwrap();
        let first = selector.excluded().to_vec();
        prop_assert_eq!(selector.excluded(), first.as_slice());

        let rebuilt = Selector::new("/nonexistent", &["**"], &excludes, use_defaults).unwrap();
        prop_assert_eq!(rebuilt.excluded(), first.as_slice());

        // User excludes come first, without duplicates.
        let mut seen = std::collections::HashSet::new();
        prop_assert!(first.iter().all(|p| seen.insert(p.clone())));
        for pattern in &excludes {
            prop_assert!(first.contains(pattern));
        }
    }
}
