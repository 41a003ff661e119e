//! Eviction-order scenarios: long operation sequences with TTLs chosen so
//! nothing expires, isolating the recency bookkeeping.

use ttlkit::cache::ttl_lru::TtlCache;

fn lru_order(cache: &TtlCache<String, String>) -> Vec<String> {
    cache.lru_order().cloned().collect()
}

fn key(i: u32) -> String {
    format!("key{i}")
}

fn value(i: u32) -> String {
    format!("value{i}")
}

#[test]
fn eviction_follows_recency_not_insertion() {
    let mut cache: TtlCache<String, String> = TtlCache::new(5, 0.5).unwrap();
    assert_eq!(cache.capacity(), 10);

    assert_eq!(cache.get(&key(1), 1).unwrap(), None);
    cache.insert(key(1), value(1), 2, 100).unwrap();
    cache.insert(key(2), value(2), 3, 100).unwrap();
    cache.insert(key(3), value(3), 4, 100).unwrap();
    assert_eq!(cache.get(&key(2), 5).unwrap(), Some(&value(2)));
    cache.insert(key(4), value(4), 6, 100).unwrap();
    cache.insert(key(5), value(5), 7, 100).unwrap();
    assert_eq!(cache.get(&key(4), 8).unwrap(), Some(&value(4)));

    // sixth distinct key: key1 is the least recently touched and goes
    cache.insert(key(6), value(6), 9, 100).unwrap();

    assert_eq!(cache.len(), 5);
    assert_eq!(
        lru_order(&cache),
        vec![key(3), key(2), key(5), key(4), key(6)]
    );
    assert_eq!(cache.get(&key(1), 9).unwrap(), None);
    cache.debug_validate_invariants();
}

#[test]
fn continued_churn_keeps_evicting_the_oldest() {
    let mut cache: TtlCache<String, String> = TtlCache::new(5, 0.5).unwrap();

    assert_eq!(cache.get(&key(1), 1).unwrap(), None);
    cache.insert(key(1), value(1), 2, 100).unwrap();
    cache.insert(key(2), value(2), 3, 100).unwrap();
    cache.insert(key(3), value(3), 4, 100).unwrap();
    assert_eq!(cache.get(&key(2), 5).unwrap(), Some(&value(2)));
    cache.insert(key(4), value(4), 6, 100).unwrap();
    cache.insert(key(5), value(5), 7, 100).unwrap();
    assert_eq!(cache.get(&key(4), 8).unwrap(), Some(&value(4)));
    cache.insert(key(6), value(6), 9, 100).unwrap(); // evicts key1

    cache.insert(key(7), value(7), 10, 100).unwrap(); // evicts key3
    cache.insert(key(8), value(8), 11, 100).unwrap(); // evicts key2
    cache.insert(key(9), value(9), 12, 100).unwrap(); // evicts key5

    assert_eq!(cache.get(&key(1), 13).unwrap(), None);
    assert_eq!(cache.get(&key(9), 14).unwrap(), Some(&value(9)));
    assert_eq!(cache.get(&key(8), 15).unwrap(), Some(&value(8)));

    assert_eq!(
        lru_order(&cache),
        vec![key(4), key(6), key(7), key(9), key(8)]
    );
    cache.debug_validate_invariants();
}

#[test]
fn updating_a_key_moves_it_to_newest() {
    let mut cache: TtlCache<String, String> = TtlCache::new(5, 0.5).unwrap();
    for i in 1..=5 {
        cache.insert(key(i), value(i), i as i64, 100).unwrap();
    }

    // rewriting key1 refreshes its recency, so key2 is the next victim
    cache.insert(key(1), "rewritten".to_string(), 6, 100).unwrap();
    cache.insert(key(6), value(6), 7, 100).unwrap();

    assert_eq!(cache.get(&key(2), 8).unwrap(), None);
    assert_eq!(cache.get(&key(1), 9).unwrap(), Some(&"rewritten".to_string()));
    cache.debug_validate_invariants();
}

#[test]
fn eviction_only_triggers_at_the_load_ceiling() {
    let mut cache: TtlCache<String, String> = TtlCache::new(5, 0.5).unwrap();
    for i in 1..=5 {
        cache.insert(key(i), value(i), i as i64, 100).unwrap();
    }
    // all five still present
    for i in 1..=5 {
        assert!(cache.get(&key(i), 10).unwrap().is_some());
    }
    assert_eq!(cache.len(), 5);
}
