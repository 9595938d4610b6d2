//! Criterion benchmarks for stable sorting.
//! Focus sizes: n in {0, 10, 100, 1_000, 10_000}, shuffled / presorted /
//! reversed inputs at the largest size.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use orderkit::sort::{sorted, sorted_with};
use orderkit::{Natural, Reversed};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen::<u64>()).collect()
}

fn bench_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for &n in &[0_usize, 10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("shuffled", n), &n, |b, &n| {
            b.iter_batched(
                || random_values(n, 43),
                |xs| sorted(&xs),
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("presorted_10000", |b| {
        let xs: Vec<u64> = (0..10_000).collect();
        b.iter(|| sorted(&xs))
    });
    group.bench_function("reversed_10000", |b| {
        let xs: Vec<u64> = (0..10_000).rev().collect();
        b.iter(|| sorted(&xs))
    });
    group.bench_function("reversed_comparator_10000", |b| {
        let xs = random_values(10_000, 44);
        b.iter(|| sorted_with(&xs, &Reversed(Natural)))
    });
    group.finish();
}

criterion_group!(benches, bench_sorted);
criterion_main!(benches);
