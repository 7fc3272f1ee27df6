//! Benchmarks for block rendering.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use repl_blocks::{Block, Registry, escape_text};

/// A REPL transcript heavy with operators that need escaping.
fn dense_transcript() -> String {
    "> List.filter (\\x -> x > 2 && x < 9) [1, 2, 3]\n[3] : List number\n"
        .repeat(200)
}

/// A transcript with no reserved characters at all.
fn clean_transcript() -> String {
    "import Html exposing time\nmain = text hello\n".repeat(200)
}

fn bench_escape_dense(c: &mut Criterion) {
    let input = dense_transcript();
    c.bench_function("escape_dense", |b| b.iter(|| escape_text(&input)));
}

fn bench_escape_clean(c: &mut Criterion) {
    let input = clean_transcript();
    c.bench_function("escape_clean", |b| b.iter(|| escape_text(&input)));
}

fn bench_render_repl(c: &mut Criterion) {
    let registry = Registry::new();
    let block = Block::new(dense_transcript());
    c.bench_function("render_repl", |b| {
        b.iter(|| registry.process("repl", &block).unwrap())
    });
}

criterion_group!(
    benches,
    bench_escape_dense,
    bench_escape_clean,
    bench_render_repl
);
criterion_main!(benches);
