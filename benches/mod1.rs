//! Benchmarks for exact mod-1 arithmetic.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use num_rational::BigRational;
use polydiff::Mod1;

fn bench_mod1_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mod1 Addition");

    for denom in [4i64, 64, 4096, 1 << 20] {
        group.bench_with_input(BenchmarkId::from_parameter(denom), &denom, |b, &denom| {
            let step = Mod1::from_integers(denom - 1, denom).unwrap();
            b.iter(|| {
                let mut acc = Mod1::zero();
                for _ in 0..100 {
                    acc = &acc + &step;
                }
                acc
            });
        });
    }

    group.finish();
}

fn bench_mod1_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mod1 Multiplication");

    for denom in [7i64, 97, 7919] {
        group.bench_with_input(BenchmarkId::from_parameter(denom), &denom, |b, &denom| {
            let a = Mod1::from_integers(3, denom).unwrap();
            let factor = Mod1::from_integers(denom - 2, denom).unwrap();
            b.iter(|| {
                let mut acc = a.clone();
                for _ in 0..100 {
                    acc = &acc * &factor;
                }
                acc
            });
        });
    }

    group.finish();
}

fn bench_canonicalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Canonicalization");

    for magnitude in [10i64, 10_000, 10_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(magnitude),
            &magnitude,
            |b, &magnitude| {
                let raw = BigRational::new(BigInt::from(-7 * magnitude - 3), BigInt::from(8));
                b.iter(|| Mod1::new(raw.clone()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mod1_addition,
    bench_mod1_multiplication,
    bench_canonicalization
);
criterion_main!(benches);
