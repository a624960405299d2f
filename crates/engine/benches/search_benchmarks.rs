//! Search Benchmarks
//!
//! Full-scan cost of the three query types over a synthetic corpus.
//!
//! ## Running
//!
//! ```bash
//! cargo bench -p minisearch-engine --bench search_benchmarks
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use minisearch_engine::{build, Corpus, Searcher};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Fixtures
// =============================================================================

const VOCABULARY: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
];

fn make_corpus(files: usize, lines_per_file: usize) -> (TempDir, Corpus) {
    let dir = TempDir::new().unwrap();
    for f in 0..files {
        let mut contents = String::new();
        for l in 0..lines_per_file {
            let a = VOCABULARY[(f + l) % VOCABULARY.len()];
            let b = VOCABULARY[(f * 3 + l * 7) % VOCABULARY.len()];
            contents.push_str(&format!("Line {}: {} and {}, then {}.\n", l, a, b, a));
        }
        fs::write(dir.path().join(format!("doc_{:03}.txt", f)), contents).unwrap();
    }
    let (corpus, _) = build(dir.path()).unwrap();
    (dir, corpus)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &lines in &[1_000usize, 10_000] {
        let (_dir, corpus) = make_corpus(10, lines / 10);
        let searcher = Searcher::new(&corpus).unwrap();
        group.throughput(Throughput::Elements(corpus.line_count() as u64));

        group.bench_with_input(BenchmarkId::new("word", lines), &lines, |b, _| {
            b.iter(|| searcher.search_word(black_box("Delta")).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("phrase", lines), &lines, |b, _| {
            b.iter(|| searcher.search_phrase(black_box("echo and golf")).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("multi_word", lines), &lines, |b, _| {
            b.iter(|| {
                searcher
                    .search_multiple_words(black_box("alpha hotel juliet"))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn build_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let (dir, corpus) = make_corpus(20, 500);
    group.throughput(Throughput::Elements(corpus.line_count() as u64));
    group.bench_function("20_files_x_500_lines", |b| {
        b.iter(|| build(black_box(dir.path())).unwrap())
    });
    group.finish();
}

criterion_group!(benches, search_benchmarks, build_benchmarks);
criterion_main!(benches);
