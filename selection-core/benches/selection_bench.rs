//! Selection benchmarks: fast vs full scan over a tree with a large
//! excluded subtree.
//! Run with: cargo bench -p selection-core --bench selection_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use selection_core::{ScanStrategy, Selector, SelectorOptions};
use tempfile::TempDir;

/// `count` source files plus ten times as many files under `target/`.
fn create_test_tree(count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..count {
        let src = dir.path().join(format!("src/dir_{:03}", i / 100));
        std::fs::create_dir_all(&src).ok();
        std::fs::write(src.join(format!("f_{i:05}.java")), "class A {}\n").unwrap();
    }
    for i in 0..count * 10 {
        let out = dir.path().join(format!("target/classes/dir_{:03}", i / 100));
        std::fs::create_dir_all(&out).ok();
        std::fs::write(out.join(format!("f_{i:05}.class")), "").unwrap();
    }
    dir
}

fn selection_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    group.sample_size(10);

    for size in [100, 1000] {
        let dir = create_test_tree(size);
        for strategy in [ScanStrategy::Fast, ScanStrategy::Full] {
            let options = SelectorOptions {
                strategy,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        let selector = Selector::with_options(dir.path(), options.clone()).unwrap();
                        selector.selected_files().len()
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, selection_strategies);
criterion_main!(benches);
