//! Suffix trie build and lookup benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trieseek::index::{build_from_lines, IndexConfig};

/// Generate `count` lines of code-like text
fn sample_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("    let value_{i} = compute(item_{i}, \"Hello from line {i}\");", i = i))
        .collect()
}

fn quiet() -> IndexConfig {
    IndexConfig {
        show_progress: false,
        ..Default::default()
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    for count in [100, 1_000] {
        let lines = sample_lines(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &lines, |b, lines| {
            b.iter(|| build_from_lines(black_box(lines), &quiet()))
        });
    }

    group.finish();
}

fn bench_build_capped(c: &mut Criterion) {
    let lines = sample_lines(1_000);
    let config = IndexConfig {
        max_suffix_len: Some(20),
        show_progress: false,
    };

    c.bench_function("build_capped_1000", |b| {
        b.iter(|| build_from_lines(black_box(&lines), &config))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let built = build_from_lines(&sample_lines(1_000), &quiet());
    let queries = ["compute", "hello from line 42", "value_999 =", "missing text"];

    let mut group = c.benchmark_group("lookup");
    for query in queries {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, &q| {
            b.iter(|| built.index.lookup(black_box(q)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_build_capped, bench_lookup);
criterion_main!(benches);
