//! Criterion benchmarks for the fixed-width Fibonacci engine.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibeng_core::calculator::Calculator;
use fibeng_core::fastdoubling::FastDoubling;
use fibeng_core::iterator::Iterative;
use fibeng_core::to_decimal_string;

fn bench_algorithms(c: &mut Criterion) {
    let fast = FastDoubling::new();
    let linear = Iterative::new();

    let ns: Vec<u64> = vec![100, 500, 1_000];

    let mut group = c.benchmark_group("FastDoubling");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fast.fib(n));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Iterative");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| linear.fib(n));
        });
    }
    group.finish();
}

fn bench_decimal(c: &mut Criterion) {
    let f1000 = FastDoubling::new().fib(1000);
    c.bench_function("to_decimal_string/F(1000)", |b| {
        b.iter(|| to_decimal_string(&f1000));
    });
}

criterion_group!(benches, bench_algorithms, bench_decimal);
criterion_main!(benches);
