//! Wall-clock front end for the TTL cache.
//!
//! [`TtlCache`](crate::cache::ttl_lru::TtlCache) leaves the clock to its
//! caller: every operation takes an explicit timestamp. `RealTimeCache`
//! wraps it for the common case where "now" should simply be now — it reads
//! a monotonic clock per call and converts the elapsed time to ticks, so
//! callers pass TTLs only.
//!
//! Ticks default to milliseconds. `with_resolution` selects a different tick
//! rate (e.g. `1_000_000` for microseconds). `std::time::Instant` is
//! monotonic, so the wrapped cache can never observe a clock regression.
//!
//! ## Example
//!
//! ```
//! use ttlkit::cache::realtime::RealTimeCache;
//!
//! let mut cache: RealTimeCache<&str, i32> = RealTimeCache::new(100, 0.25).unwrap();
//! cache.insert("session", 42, 60_000).unwrap(); // lives for one minute
//! assert_eq!(cache.get(&"session").unwrap(), Some(&42));
//! ```

use std::hash::{BuildHasher, Hash};
use std::time::Instant;

use crate::cache::ttl_lru::{DefaultHashBuilder, TtlCache};
use crate::error::CacheResult;
use crate::traits::Timestamp;

/// Ticks per second when none is chosen: milliseconds.
const DEFAULT_TICKS_PER_SEC: u32 = 1_000;

/// [`TtlCache`] with timestamps filled in from a monotonic clock.
#[derive(Debug)]
pub struct RealTimeCache<K, V, S = DefaultHashBuilder> {
    cache: TtlCache<K, V, S>,
    epoch: Instant,
    ticks_per_sec: u32,
}

impl<K, V> RealTimeCache<K, V>
where
    K: Eq + Hash,
{
    /// Creates a cache with millisecond ticks.
    ///
    /// Parameters and errors are those of [`TtlCache::new`].
    pub fn new(max_entries: usize, max_load_factor: f64) -> CacheResult<Self> {
        Self::with_resolution(max_entries, max_load_factor, DEFAULT_TICKS_PER_SEC)
    }

    /// Creates a cache whose tick is `1 / ticks_per_sec` seconds.
    pub fn with_resolution(
        max_entries: usize,
        max_load_factor: f64,
        ticks_per_sec: u32,
    ) -> CacheResult<Self> {
        Ok(Self {
            cache: TtlCache::new(max_entries, max_load_factor)?,
            epoch: Instant::now(),
            ticks_per_sec,
        })
    }
}

impl<K, V, S> RealTimeCache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Looks up `key` at the current time.
    pub fn get(&mut self, key: &K) -> CacheResult<Option<&V>> {
        let now = self.now();
        self.cache.get(key, now)
    }

    /// Inserts `key`, expiring `ticks_to_live` ticks from now.
    ///
    /// Fails with `DeadOnArrival` if `ticks_to_live` is not positive.
    pub fn insert(&mut self, key: K, value: V, ticks_to_live: Timestamp) -> CacheResult<()> {
        let now = self.now();
        self.cache.insert(key, value, now, ticks_to_live)
    }

    /// Runs sampling bulk expiry at the current time. Returns how many
    /// entries were removed.
    pub fn remove_expired(&mut self, target_ratio: f64) -> CacheResult<usize> {
        let now = self.now();
        self.cache.remove_expired(now, target_ratio)
    }

    /// Ticks elapsed since the cache was created.
    pub fn now(&self) -> Timestamp {
        let nanos = self.epoch.elapsed().as_nanos();
        (nanos * self.ticks_per_sec as u128 / 1_000_000_000) as Timestamp
    }

    /// Number of entries held, counting expired entries not yet reclaimed.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Size of the slot table.
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Current table load.
    pub fn load_factor(&self) -> f64 {
        self.cache.load_factor()
    }
}
