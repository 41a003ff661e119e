//! TTL behavior: absolute expiry, refresh on update, passive reclamation,
//! and the clock contract.

use ttlkit::cache::ttl_lru::TtlCache;
use ttlkit::error::CacheError;

#[test]
fn value_is_gone_once_its_ttl_elapses() {
    let mut cache: TtlCache<String, u32> = TtlCache::new(10, 0.5).unwrap();
    cache.insert("k".to_string(), 7, 10, 5).unwrap(); // live until 15

    assert_eq!(cache.get(&"k".to_string(), 11).unwrap(), Some(&7));
    assert_eq!(cache.get(&"k".to_string(), 14).unwrap(), Some(&7));
    assert_eq!(cache.get(&"k".to_string(), 15).unwrap(), None);
    assert_eq!(cache.get(&"k".to_string(), 16).unwrap(), None);
}

#[test]
fn update_keeps_a_key_alive_past_its_first_expiry() {
    let mut cache: TtlCache<String, u32> = TtlCache::new(10, 0.5).unwrap();
    cache.insert("k".to_string(), 1, 1, 5).unwrap(); // would expire at 6
    cache.insert("k".to_string(), 2, 4, 5).unwrap(); // now expires at 9

    assert_eq!(cache.get(&"k".to_string(), 7).unwrap(), Some(&2));
    assert_eq!(cache.len(), 1);
}

#[test]
fn mass_expiry_then_bulk_removal() {
    let mut cache: TtlCache<String, String> = TtlCache::new(100, 0.5).unwrap();
    assert_eq!(cache.capacity(), 200);

    // staggered inserts, synchronized expiry: everything dies at t = 102
    for i in 1..=100i64 {
        cache
            .insert(format!("key{i}"), format!("value{i}"), i, 102 - i)
            .unwrap();
    }
    assert_eq!(cache.len(), 100);

    // nothing has expired yet, so the sampler removes nothing
    assert_eq!(cache.remove_expired(101, 0.5).unwrap(), 0);
    assert_eq!(cache.len(), 100);

    // everything expired: sampling runs until the table is too sparse or
    // too small to keep going
    cache.remove_expired(102, 0.5).unwrap();
    assert!(cache.len() < 20 || (cache.len() as f64) < 0.1 * cache.capacity() as f64);
    cache.debug_validate_invariants();

    // whatever the sampler left behind is still invisible to lookups
    for i in 1..=100i64 {
        assert_eq!(cache.get(&format!("key{i}"), 102).unwrap(), None);
    }
}

#[test]
fn lookups_reclaim_expired_entries_in_passing() {
    let mut cache: TtlCache<String, u32> = TtlCache::new(10, 0.5).unwrap();
    cache.insert("short".to_string(), 1, 1, 2).unwrap(); // dead at 3
    cache.insert("long".to_string(), 2, 2, 100).unwrap();
    assert_eq!(cache.len(), 2);

    // a miss at t = 50 sweeps the touched cluster; the expired entry in it
    // is reclaimed even though it was never looked up again
    cache.get(&"short".to_string(), 50).unwrap();
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"long".to_string(), 51).unwrap(), Some(&2));
}

#[test]
fn expired_entries_still_count_toward_len_until_reclaimed() {
    let mut cache: TtlCache<String, u32> = TtlCache::new(100, 0.5).unwrap();
    for i in 1..=30i64 {
        cache.insert(format!("key{i}"), i as u32, i, 1).unwrap();
    }
    // everything is long dead, but nothing has touched the clusters
    assert_eq!(cache.len(), 30);
}

#[test]
fn regressing_timestamps_fail_and_mutate_nothing() {
    let mut cache: TtlCache<String, u32> = TtlCache::new(10, 0.5).unwrap();
    cache.insert("a".to_string(), 1, 10, 100).unwrap();

    let before_len = cache.len();
    assert!(matches!(
        cache.get(&"a".to_string(), 9),
        Err(CacheError::ClockRegression { now: 9, current: 10 })
    ));
    assert!(matches!(
        cache.insert("b".to_string(), 2, 9, 100),
        Err(CacheError::ClockRegression { .. })
    ));
    assert!(matches!(
        cache.remove_expired(9, 0.25),
        Err(CacheError::ClockRegression { .. })
    ));

    assert_eq!(cache.len(), before_len);
    assert_eq!(cache.current_timestamp(), 10);
    assert_eq!(cache.get(&"a".to_string(), 10).unwrap(), Some(&1));
}

#[test]
fn repeated_reads_at_one_timestamp_are_idempotent() {
    let mut cache: TtlCache<String, u32> = TtlCache::new(10, 0.5).unwrap();
    cache.insert("a".to_string(), 1, 1, 100).unwrap();
    cache.insert("b".to_string(), 2, 2, 100).unwrap();

    let first = cache.get(&"a".to_string(), 5).unwrap().copied();
    let second = cache.get(&"a".to_string(), 5).unwrap().copied();
    assert_eq!(first, second);

    // the second read found the key already newest; order is stable
    let order: Vec<String> = cache.lru_order().cloned().collect();
    assert_eq!(order, vec!["b".to_string(), "a".to_string()]);
}
