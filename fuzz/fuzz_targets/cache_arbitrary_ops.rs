#![no_main]

use libfuzzer_sys::fuzz_target;
use ttlkit::cache::ttl_lru::TtlCache;

// Fuzz arbitrary operation streams against the cache invariants
//
// Bytes drive the op mix (get / insert / bulk expire), key choice, time
// steps, and TTLs. After every operation the internal invariants are
// validated: slot/list agreement, the open-addressing probe property, and
// the load-factor ceiling.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let max_entries = 2 + usize::from(data[0] % 32);
    let max_load_factor = 0.1 + 0.1 * f64::from(data[1] % 5);
    let mut cache: TtlCache<u64, u64> = match TtlCache::new(max_entries, max_load_factor) {
        Ok(cache) => cache,
        Err(_) => return,
    };
    let ceiling = (max_load_factor * cache.capacity() as f64).floor() as usize;

    let mut now: i64 = 0;
    for chunk in data[2..].chunks(4) {
        let op = chunk[0] % 8;
        let key = u64::from(*chunk.get(1).unwrap_or(&0) % 64);
        now += i64::from(*chunk.get(2).unwrap_or(&1) % 7);
        let ttl = 1 + i64::from(*chunk.get(3).unwrap_or(&1) % 32);

        match op {
            0..=2 => {
                cache.get(&key, now).unwrap();
            }
            3..=6 => {
                cache.insert(key, key, now, ttl).unwrap();
            }
            _ => {
                cache.remove_expired(now, 0.25).unwrap();
            }
        }

        cache.debug_validate_invariants();
        assert!(cache.len() <= ceiling);
    }
});
