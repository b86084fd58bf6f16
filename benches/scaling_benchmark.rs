// ============================================================================
// Scaling Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Checked Multiply - Compares the two overflow-detection techniques
// 2. Discount - Validated discount calculation
// 3. Batch Scaling - End-to-end slice scaling through a real config file
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricing_engine::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Checked Multiply Benchmarks
// ============================================================================

fn benchmark_checked_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_multiply");

    group.bench_function("inverse_check", |b| {
        b.iter(|| black_box(checked_multiply(black_box(46_000), black_box(46_000))))
    });

    group.bench_function("range_precheck", |b| {
        b.iter(|| black_box(checked_multiply_ranged(black_box(46_000), black_box(46_000))))
    });

    group.bench_function("inverse_check_overflowing", |b| {
        b.iter(|| black_box(checked_multiply(black_box(i32::MAX), black_box(2))))
    });

    group.finish();
}

// ============================================================================
// Discount Benchmarks
// ============================================================================

fn benchmark_discount(c: &mut Criterion) {
    c.bench_function("calculate_discount_member", |b| {
        b.iter(|| {
            black_box(calculate_discount(
                black_box(100.0),
                black_box(10.0),
                black_box(true),
            ))
        })
    });
}

// ============================================================================
// Batch Scaling Benchmarks
// Each iteration re-reads the config file, matching production behavior.
// ============================================================================

fn benchmark_multiply_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_slice");

    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.txt");
    fs::write(&config, "3").unwrap();

    for size in [10, 100, 1000].iter() {
        let numbers: Vec<i32> = (0..*size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &numbers, |b, numbers| {
            b.iter(|| black_box(multiply_slice(numbers, &config)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_checked_multiply,
    benchmark_discount,
    benchmark_multiply_slice
);
criterion_main!(benches);
