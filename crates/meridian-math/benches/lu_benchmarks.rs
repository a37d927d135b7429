//! Benchmarks for the LU decomposition.
//!
//! Run with: cargo bench -p meridian-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nalgebra::DMatrix;

use meridian_math::linear_algebra::LuDecomposition;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Deterministic, diagonally dominant test matrix.
fn create_test_matrix(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| {
        let hash = simple_hash(i as u64, j as u64);
        let value = (hash % 2000) as f64 / 1000.0 - 1.0;
        if i == j {
            value + n as f64
        } else {
            value
        }
    })
}

fn create_rhs(n: usize, cols: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, cols, |i, j| ((i * 7 + j * 3) % 11) as f64 - 5.0)
}

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i.wrapping_mul(31)).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("lu_decompose");

    for n in [4, 16, 64, 128] {
        let a = create_test_matrix(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &a, |b, a| {
            b.iter(|| LuDecomposition::new(black_box(a)));
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("lu_solve");

    for n in [16, 64, 128] {
        let lu = LuDecomposition::new(&create_test_matrix(n));
        for cols in [1, 8] {
            let rhs = create_rhs(n, cols);
            group.bench_with_input(
                BenchmarkId::new(format!("n{}", n), cols),
                &rhs,
                |b, rhs| {
                    b.iter(|| lu.solve(black_box(rhs)).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_determinant(c: &mut Criterion) {
    let lu = LuDecomposition::new(&create_test_matrix(64));

    c.bench_function("lu_determinant_64", |b| {
        b.iter(|| black_box(&lu).determinant().unwrap());
    });
}

criterion_group!(benches, bench_decompose, bench_solve, bench_determinant);
criterion_main!(benches);
