//! Criterion benchmarks for pricer_core numerics.
//!
//! Measures the normal distribution functions and the streaming statistics
//! accumulator the Monte Carlo engine reduces payoffs into.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::distributions::{norm_cdf, norm_inv_cdf};
use pricer_core::math::statistics::RunningStats;

/// Benchmark normal CDF and quantile evaluation.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");

    group.bench_function("norm_cdf", |b| {
        b.iter(|| norm_cdf(black_box(0.35)));
    });

    group.bench_function("norm_cdf_tail", |b| {
        b.iter(|| norm_cdf(black_box(-7.5)));
    });

    group.bench_function("norm_inv_cdf", |b| {
        b.iter(|| norm_inv_cdf(black_box(0.975)));
    });

    group.finish();
}

/// Benchmark pushing into and merging running statistics.
fn bench_running_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_stats");

    for size in [1_000, 100_000] {
        let values: Vec<f64> = (0..size).map(|i| (i as f64 * 0.37).sin().abs()).collect();

        group.bench_with_input(BenchmarkId::new("push", size), &values, |b, values| {
            b.iter(|| {
                let mut stats = RunningStats::new();
                for &v in values {
                    stats.push(black_box(v));
                }
                stats
            });
        });

        let parts: Vec<RunningStats> = values
            .chunks(size / 16)
            .map(|chunk| chunk.iter().copied().collect())
            .collect();
        group.bench_with_input(BenchmarkId::new("merge_16", size), &parts, |b, parts| {
            b.iter(|| {
                let mut total = RunningStats::new();
                for part in parts {
                    total.merge(black_box(part));
                }
                total
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distributions, bench_running_stats);
criterion_main!(benches);
