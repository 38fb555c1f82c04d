use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use textbook::algorithms::binary_search::binary_search;
use textbook::algorithms::merge_sort::merge_sort;

fn compare_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort");

    for size in [1_000usize, 10_000, 100_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
        let items: Vec<u64> = (0..size).map(|_| rng.random::<u64>()).collect();

        group.bench_with_input(BenchmarkId::new("merge sort", size), &items, |b, items| {
            b.iter(|| merge_sort(items))
        });
        group.bench_with_input(
            BenchmarkId::new("std stable sort", size),
            &items,
            |b, items| {
                b.iter(|| {
                    let mut sorted = items.clone();
                    sorted.sort();
                    sorted
                })
            },
        );
    }

    group.finish();
}

fn compare_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");

    for size in [1_000u64, 100_000] {
        let items: Vec<u64> = (0..size).collect();
        // Roughly half the probes hit, half miss.
        let mut rng = ChaCha8Rng::seed_from_u64(size);
        let targets: Vec<u64> = (0..64).map(|_| rng.random_range(0..2 * size)).collect();

        group.bench_with_input(BenchmarkId::new("binary search", size), &items, |b, items| {
            b.iter(|| {
                targets
                    .iter()
                    .filter(|&t| binary_search(items, t).is_some())
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("std search", size), &items, |b, items| {
            b.iter(|| {
                targets
                    .iter()
                    .filter(|&t| items.binary_search(t).is_ok())
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, compare_sort, compare_search);
criterion_main!(benches);
