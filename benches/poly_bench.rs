//! Benchmarks for univariate polynomial algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sylvester_poly::{durand_kerner, poly_gcd, DensePoly, RootFinderConfig};
use sylvester_rings::{C64, Q};

/// Generates a polynomial with rational coefficients.
fn poly_q(degree: usize, offset: i64) -> DensePoly<Q> {
    let coeffs: Vec<Q> = (0..=degree)
        .map(|i| Q::from_integer((i as i64 * 7 + offset) % 19 - 9))
        .collect();
    DensePoly::new(coeffs)
}

/// Product of `(x - k)` for `k = 1..=degree`, over C64.
fn shifted_roots(degree: usize) -> DensePoly<C64> {
    (1..=degree).fold(DensePoly::constant(C64::from(1.0)), |acc, k| {
        #[allow(clippy::cast_precision_loss)]
        let root = C64::from(k as f64);
        acc * DensePoly::new(vec![-root, C64::from(1.0)])
    })
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [16, 64, 256] {
        let p = poly_q(size, 1);
        let q = poly_q(size, 5);

        group.bench_with_input(BenchmarkId::new("DensePoly<Q>", size), &size, |b, _| {
            b.iter(|| black_box(&p * &q))
        });
    }

    group.finish();
}

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_gcd");

    for size in [8, 16, 32] {
        let common = poly_q(size / 2, 3);
        let f = &common * &poly_q(size / 2, 11);
        let g = &common * &poly_q(size / 2, 13);

        group.bench_with_input(BenchmarkId::new("euclid_q", size), &size, |b, _| {
            b.iter(|| black_box(poly_gcd(&f, &g)))
        });
    }

    group.finish();
}

fn bench_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_roots");
    group.sample_size(50);
    let config = RootFinderConfig::default();

    for degree in [3, 6, 10] {
        let p = shifted_roots(degree);
        group.bench_with_input(BenchmarkId::new("durand_kerner", degree), &degree, |b, _| {
            b.iter(|| black_box(durand_kerner(&p, &config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiplication, bench_gcd, bench_roots);
criterion_main!(benches);
