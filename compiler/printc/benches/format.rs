//! Formatting benchmarks for `printc`.
//!
//! Compares applying a cached plan against compiling on every call, and
//! measures compile throughput as format strings grow.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use printc::{args, Formatter};
use printc_plan::compile_plan;

const FORMATS: [&str; 4] = [
    "plain text without directives",
    "%d items",
    "%-10s|%08.3f|%#x",
    "%2$s %1$6s %2$s",
];

/// A format with `n` directives separated by literal text.
fn generate_n_directives(n: usize) -> String {
    (0..n).map(|i| format!("field{i}=%-6d ")).collect()
}

fn bench_cached_vs_uncached(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/cached_vs_uncached");
    let args = args!["name", 7, 3.25, 255];

    for (i, format) in FORMATS.iter().enumerate() {
        let formatter = Formatter::new();
        let plan = formatter
            .try_compile(format)
            .unwrap_or_else(|err| panic!("bench format {format:?} does not compile: {err}"));
        if let Err(err) = formatter.apply(&plan, &args) {
            panic!("bench format {format:?} does not apply: {err}");
        }

        group.bench_with_input(BenchmarkId::new("cached", i), format, |b, format| {
            b.iter(|| black_box(formatter.format(black_box(format), &args)));
        });
        group.bench_with_input(BenchmarkId::new("plan", i), &plan, |b, plan| {
            b.iter(|| black_box(formatter.apply(black_box(plan), &args)));
        });
        group.bench_with_input(BenchmarkId::new("uncached", i), format, |b, format| {
            b.iter(|| {
                let plan = compile_plan(black_box(format));
                black_box(formatter.apply(&plan, &args))
            });
        });
    }

    group.finish();
}

fn bench_compile_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/compile/throughput");

    for directives in [1, 10, 100, 1000] {
        let source = generate_n_directives(directives);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(directives),
            &source,
            |b, src| {
                b.iter(|| black_box(compile_plan(black_box(src))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cached_vs_uncached, bench_compile_throughput);
criterion_main!(benches);
