use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use ttlkit::cache::ttl_lru::TtlCache;
use ttlkit::traits::Timestamp;

fn populated(max_entries: usize, ttl: Timestamp) -> TtlCache<u64, u64> {
    let mut cache = TtlCache::new(max_entries, 0.5).unwrap();
    for i in 0..max_entries as u64 {
        cache.insert(i, i, i as Timestamp + 1, ttl).unwrap();
    }
    cache
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("ttl_get_hit", |b| {
        b.iter_batched(
            || populated(1024, 1_000_000),
            |mut cache| {
                let now = cache.current_timestamp();
                for i in 0..1024u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i), now));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("ttl_get_miss", |b| {
        b.iter_batched(
            || populated(1024, 1_000_000),
            |mut cache| {
                let now = cache.current_timestamp();
                for i in 0..1024u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i + 10_000), now));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_churn(c: &mut Criterion) {
    c.bench_function("ttl_insert_churn", |b| {
        b.iter_batched(
            || populated(1024, 1_000_000),
            |mut cache| {
                // every insert past the ceiling evicts the LRU entry
                let mut now = cache.current_timestamp();
                for i in 0..1024u64 {
                    now += 1;
                    cache
                        .insert(std::hint::black_box(i + 10_000), i, now, 1_000_000)
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_remove_expired(c: &mut Criterion) {
    c.bench_function("ttl_remove_expired_half_dead", |b| {
        b.iter_batched(
            || {
                let mut cache = TtlCache::new(1024, 0.5).unwrap();
                for i in 0..1024u64 {
                    // alternate entries expire at t = 2000, the rest much later
                    let ttl = if i % 2 == 0 { 2_000 - i as Timestamp } else { 1_000_000 };
                    cache.insert(i, i, i as Timestamp, ttl).unwrap();
                }
                cache
            },
            |mut cache| {
                let _ = std::hint::black_box(cache.remove_expired(2_000, 0.1));
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_get_miss,
    bench_insert_churn,
    bench_remove_expired
);
criterion_main!(benches);
