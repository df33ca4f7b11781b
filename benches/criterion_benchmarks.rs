use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ring_lru::config::LruListConfig;
use ring_lru::{CircularList, JosephusSolver, LruList};
use std::num::NonZeroUsize;

// Helper to create a list with the init pattern
fn make_lru<T: std::hash::Hash + Eq + Clone>(cap: usize) -> LruList<T> {
    let config = LruListConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    };
    LruList::init(config)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const LIST_SIZE: usize = 100;
    let mut group = c.benchmark_group("List Operations");

    // LRU benchmarks
    {
        let mut list = make_lru(LIST_SIZE);
        for i in 0..LIST_SIZE {
            list.add(i);
        }

        group.bench_function("LRU contains hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(list.contains(&(i % LIST_SIZE)));
                }
            });
        });

        group.bench_function("LRU add existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(list.add(i % LIST_SIZE));
                }
            });
        });

        group.bench_function("LRU add evicting", |b| {
            let mut next = LIST_SIZE;
            b.iter(|| {
                for _ in 0..100 {
                    black_box(list.add(next));
                    next += 1;
                }
            });
        });
    }

    // Circular list benchmarks
    group.bench_function("Ring build 1000", |b| {
        b.iter(|| black_box(CircularList::from_ring_order(0..1_000u32).unwrap()));
    });

    // Josephus benchmarks
    for step in [2usize, 7] {
        let solver = JosephusSolver::try_new(step).unwrap();
        group.bench_function(format!("Josephus 1000 step {}", step), |b| {
            b.iter_batched(
                || CircularList::from_ring_order(0..1_000u32).unwrap(),
                |ring| black_box(solver.solve_with(ring, |_| {}).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
