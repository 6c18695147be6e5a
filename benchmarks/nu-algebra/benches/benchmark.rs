//! N/U algebra benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the folds (1K to 100K values)
//! - Weighted mean with and without explicit weights
//! - Sequential aggregation and the pairwise tension table
//! - End-to-end reconciliation
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nu_algebra::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate N/U values with normally distributed nominals and uniform bounds.
fn generate_values(size: usize, seed: u64) -> Vec<Nu<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let nominal = Normal::new(1.0, 0.5).unwrap();
    let bound = Uniform::new(0.0, 0.1).unwrap();

    (0..size)
        .map(|_| Nu::new(nominal.sample(&mut rng), bound.sample(&mut rng)))
        .collect()
}

/// Generate repeated measurements of one quantity (value, uncertainty).
fn generate_measurements(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let scatter = Normal::new(70.0, 2.5).unwrap();
    let bound = Uniform::new(0.3, 3.0).unwrap();

    let values = (0..size).map(|_| scatter.sample(&mut rng)).collect();
    let errors = (0..size).map(|_| bound.sample(&mut rng)).collect();
    (values, errors)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_folds(c: &mut Criterion) {
    let mut group = c.benchmark_group("folds");

    for size in [1_000, 10_000, 100_000] {
        let data = generate_values(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("cumulative_sum", size), &data, |b, data| {
            b.iter(|| cumulative_sum(black_box(data)))
        });
        group.bench_with_input(
            BenchmarkId::new("cumulative_product", size),
            &data,
            |b, data| b.iter(|| cumulative_product(black_box(data))),
        );
    }
    group.finish();
}

fn bench_weighted_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_mean");
    let size = 10_000;
    let data = generate_values(size, 7);
    let mut rng = StdRng::seed_from_u64(7);
    let weights: Vec<f64> = (0..size).map(|_| rng.random_range(0.5..2.0)).collect();

    group.bench_function("unit_weights", |b| {
        b.iter(|| weighted_mean(black_box(&data), None).unwrap())
    });
    group.bench_function("explicit_weights", |b| {
        b.iter(|| weighted_mean(black_box(&data), Some(black_box(&weights))).unwrap())
    });
    group.finish();
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");

    for size in [10, 100, 1_000] {
        let (values, errors) = generate_measurements(size, 123);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("aggregate", size), &size, |b, _| {
            b.iter(|| aggregate_sequential(black_box(&values), black_box(&errors)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("tensions", size), &size, |b, _| {
            b.iter(|| pairwise_tensions(black_box(&values), black_box(&errors)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("reconcile", size), &size, |b, _| {
            b.iter(|| {
                Reconcile::new()
                    .record_steps()
                    .build()
                    .unwrap()
                    .fit(black_box(&values), black_box(&errors))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_folds, bench_weighted_mean, bench_sequential);

criterion_main!(benches);
