use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linked_hash_map::LinkedHashMap;
use std::collections::HashSet;
use std::thread;

use chainkit::infrastructure::lock::SharedTable;
use chainkit::table::StringTable;

// Test configuration
const THREAD_COUNT: usize = 8;
const OPERATIONS: usize = 10_000;

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("name-{}", i)).collect()
}

// Insert, find, then remove every key with different bucket counts
pub fn bench_single_threaded_string_table(c: &mut Criterion) {
    let keys = keys(OPERATIONS);
    let mut group = c.benchmark_group("SingleThreaded");

    for size in [5, 101, 4099] {
        group.bench_with_input(BenchmarkId::new("StringTable", size), &size, |b, &size| {
            b.iter(|| {
                let mut table = StringTable::new(size).unwrap();
                for key in &keys {
                    table.insert(key).unwrap();
                }
                for key in &keys {
                    black_box(table.find(key).unwrap());
                }
                for key in &keys {
                    table.remove(key).unwrap();
                }
            });
        });
    }

    group.finish();
}

// Same workload on std HashSet as a baseline
pub fn bench_single_threaded_std_hash_set(c: &mut Criterion) {
    let keys = keys(OPERATIONS);
    let mut group = c.benchmark_group("SingleThreaded");

    group.bench_function("StdHashSet", |b| {
        b.iter(|| {
            let mut set = HashSet::new();
            for key in &keys {
                set.insert(key.clone());
            }
            for key in &keys {
                black_box(set.get(key.as_str()).unwrap());
            }
            for key in &keys {
                set.remove(key.as_str());
            }
        });
    });

    group.finish();
}

// Insertion-ordered map, the closest std-like cousin of a chained table
pub fn bench_single_threaded_linked_hash_map(c: &mut Criterion) {
    let keys = keys(OPERATIONS);
    let mut group = c.benchmark_group("SingleThreaded");

    group.bench_function("LinkedHashMap", |b| {
        b.iter(|| {
            let mut map = LinkedHashMap::new();
            for key in &keys {
                map.insert(key.clone(), ());
            }
            for key in &keys {
                black_box(map.get(key).unwrap());
            }
            for key in &keys {
                map.remove(key);
            }
        });
    });

    group.finish();
}

// Concurrent insertions through the external lock
pub fn bench_concurrent_insertions_shared_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("ConcurrentInsertions");

    group.bench_function("SharedTable", |b| {
        b.iter(|| {
            let table = SharedTable::new(StringTable::new(101).unwrap());

            let handles: Vec<_> = (0..THREAD_COUNT)
                .map(|thread_id| {
                    let table = table.clone();
                    thread::spawn(move || {
                        for i in 0..OPERATIONS / THREAD_COUNT {
                            table.insert(&format!("t{}-{}", thread_id, i)).unwrap();
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_threaded_string_table,
    bench_single_threaded_std_hash_set,
    bench_single_threaded_linked_hash_map,
    bench_concurrent_insertions_shared_table
);

criterion_main!(benches);
