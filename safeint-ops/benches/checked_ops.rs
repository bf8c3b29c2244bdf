use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use safeint_ops::{checked_add, checked_mul, checked_pow, Limb, Strategy, Wide};
use std::hint::black_box;

const PAIRS_I32: [(i32, i32); 4] = [
    (10, 20),
    (-3_000_000, 2_000_000),
    (0x10000, -0x8000),
    (i32::MAX, i32::MIN),
];

const PAIRS_U64: [(u64, u64); 3] = [
    (10, 20),
    (0x1_0000_0000, 0x8000_0000),
    (0x1_0000_0000, 0x1_0000_0000),
];

fn bench_mul_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_i32");
    group.bench_function("wide", |b| {
        b.iter(|| {
            for &(x, y) in &PAIRS_I32 {
                black_box(<Wide as Strategy<i32>>::checked_mul(black_box(x), black_box(y)));
            }
        })
    });
    group.bench_function("limb", |b| {
        b.iter(|| {
            for &(x, y) in &PAIRS_I32 {
                black_box(<Limb as Strategy<i32>>::checked_mul(black_box(x), black_box(y)));
            }
        })
    });
    group.finish();

    let mut group = c.benchmark_group("mul_u64");
    group.bench_function("wide_u128", |b| {
        b.iter(|| {
            for &(x, y) in &PAIRS_U64 {
                black_box(<Wide as Strategy<u64>>::checked_mul(black_box(x), black_box(y)));
            }
        })
    });
    group.bench_function("limb", |b| {
        b.iter(|| {
            for &(x, y) in &PAIRS_U64 {
                black_box(checked_mul(black_box(x), black_box(y)));
            }
        })
    });
    group.finish();
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add_u64_limb", |b| {
        b.iter(|| checked_add(black_box(0xA000_0000_0000_0000u64), black_box(0x1234u64)))
    });
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow_i64");
    for exp in [2u32, 16, 39, 62] {
        group.bench_with_input(BenchmarkId::from_parameter(exp), &exp, |b, &exp| {
            b.iter(|| checked_pow(black_box(-3i64), black_box(exp)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mul_strategies, bench_add, bench_pow);
criterion_main!(benches);
