use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use chainkit::infrastructure::hash::HashAlgorithm;

// Generate a random name-like key of the given length
fn generate_random_key(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

fn bench_key_length(c: &mut Criterion, group_name: &str, length: usize) {
    let s = generate_random_key(length);

    let mut group = c.benchmark_group(group_name);
    for algo in HashAlgorithm::ALL {
        group.bench_function(algo.name(), |b| b.iter(|| algo.hash(black_box(&s))));
    }
    group.finish();
}

pub fn bench_short_keys(c: &mut Criterion) {
    bench_key_length(c, "ShortKeys", 8);
}

pub fn bench_max_length_keys(c: &mut Criterion) {
    // Longest token the interactive driver accepts by default
    bench_key_length(c, "MaxLengthKeys", 79);
}

pub fn bench_long_keys(c: &mut Criterion) {
    bench_key_length(c, "LongKeys", 1000);
}

// Bucket placement over many keys into the default five buckets
pub fn bench_bucket_placement(c: &mut Criterion) {
    let keys: Vec<String> = (0..1000).map(|_| generate_random_key(10)).collect();

    let mut group = c.benchmark_group("BucketPlacement");
    for algo in HashAlgorithm::ALL {
        group.bench_function(algo.name(), |b| {
            b.iter(|| {
                let mut counts = [0usize; 5];
                for key in &keys {
                    counts[algo.bucket(black_box(key), 5)] += 1;
                }
                counts
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_short_keys,
    bench_max_length_keys,
    bench_long_keys,
    bench_bucket_placement
);

criterion_main!(benches);
