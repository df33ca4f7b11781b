// Compares LruList against the `lru` crate's LruCache on the same workloads
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lru::LruCache;
use ring_lru::LruList;
use std::num::NonZeroUsize;

// Benchmark configuration
const CAPACITY: usize = 64;
const NUM_OPERATIONS: usize = 10_000;

// Cycles over a key space twice the capacity, so about half the adds evict
fn workload() -> Vec<usize> {
    (0..NUM_OPERATIONS)
        .map(|i| (i * 7 + i / 3) % (CAPACITY * 2))
        .collect()
}

fn bench_mixed_workload(c: &mut Criterion) {
    let keys = workload();
    let cap = NonZeroUsize::new(CAPACITY).unwrap();
    let mut group = c.benchmark_group("Mixed Workload");

    group.bench_function("ring_lru LruList", |b| {
        b.iter(|| {
            let mut list = LruList::new(cap);
            for &k in &keys {
                black_box(list.add(k));
            }
            list.len()
        });
    });

    group.bench_function("lru LruCache", |b| {
        b.iter(|| {
            let mut cache = LruCache::new(cap);
            for &k in &keys {
                black_box(cache.push(k, ()));
            }
            cache.len()
        });
    });

    group.finish();
}

fn bench_hot_set(c: &mut Criterion) {
    let cap = NonZeroUsize::new(CAPACITY).unwrap();
    let mut group = c.benchmark_group("Hot Set");

    // Every key fits, so each add is a refresh
    group.bench_function("ring_lru LruList", |b| {
        let mut list = LruList::new(cap);
        for k in 0..CAPACITY {
            list.add(k);
        }
        b.iter(|| {
            for k in 0..CAPACITY {
                black_box(list.add(k));
            }
        });
    });

    group.bench_function("lru LruCache", |b| {
        let mut cache = LruCache::new(cap);
        for k in 0..CAPACITY {
            cache.put(k, ());
        }
        b.iter(|| {
            for k in 0..CAPACITY {
                black_box(cache.get(&k));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_mixed_workload, bench_hot_set);
criterion_main!(benches);
