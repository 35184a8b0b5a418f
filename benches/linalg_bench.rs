//! Benchmarks for matrix decompositions.
//!
//! Includes:
//! - Row reduction and determinants over Q
//! - Smith Normal Form over Z
//! - Eigenvalues of real matrices

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sylvester_linalg::{DenseMatrix, ReduceOptions};
use sylvester_rings::{Q, R64, Z};

/// Random matrix with small integer entries, reproducible per size.
fn random_entries(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n * n).map(|_| rng.gen_range(-9..=9)).collect()
}

fn random_q(n: usize) -> DenseMatrix<Q> {
    let v = random_entries(n, 42);
    DenseMatrix::from_fn(n, n, |i, j| Q::from_integer(v[i * n + j]))
}

fn random_z(n: usize) -> DenseMatrix<Z> {
    let v = random_entries(n, 7);
    DenseMatrix::from_fn(n, n, |i, j| Z::new(v[i * n + j]))
}

fn random_r64(n: usize) -> DenseMatrix<R64> {
    let v = random_entries(n, 1234);
    #[allow(clippy::cast_precision_loss)]
    DenseMatrix::from_fn(n, n, |i, j| R64(v[i * n + j] as f64))
}

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_q");

    for size in [4, 8, 16] {
        let a = random_q(size);
        group.bench_with_input(BenchmarkId::new("rref", size), &size, |b, _| {
            b.iter(|| black_box(a.reduce(&ReduceOptions::reduced())))
        });
        group.bench_with_input(BenchmarkId::new("rref_no_history", size), &size, |b, _| {
            b.iter(|| black_box(a.reduce(&ReduceOptions::reduced().without_history())))
        });
        group.bench_with_input(BenchmarkId::new("determinant", size), &size, |b, _| {
            b.iter(|| black_box(a.determinant()))
        });
    }

    group.finish();
}

fn bench_smith(c: &mut Criterion) {
    let mut group = c.benchmark_group("smith_z");

    for size in [3, 5, 8] {
        let a = random_z(size);
        group.bench_with_input(BenchmarkId::new("smith_normal_form", size), &size, |b, _| {
            b.iter(|| black_box(a.smith_normal_form()))
        });
    }

    group.finish();
}

fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral");

    for size in [3, 5, 8] {
        let a = random_r64(size);
        group.bench_with_input(BenchmarkId::new("eigenvalues_r64", size), &size, |b, _| {
            b.iter(|| black_box(a.eigenvalues()))
        });
        let q = random_q(size);
        group.bench_with_input(BenchmarkId::new("minimal_polynomial_q", size), &size, |b, _| {
            b.iter(|| black_box(q.minimal_polynomial()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduction, bench_smith, bench_spectral);
criterion_main!(benches);
