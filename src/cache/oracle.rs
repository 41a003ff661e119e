//! Unbounded reference cache.
//!
//! Keeps every insertion forever (modulo TTL) in a plain hash map: no
//! eviction, no capacity, no probing. It honors the same clock and TTL
//! contract as [`TtlCache`](crate::cache::ttl_lru::TtlCache), which makes it
//! the ground truth for randomized comparison tests — whenever the bounded
//! cache returns a value, this cache must agree on it. The bounded cache may
//! additionally miss keys this one still holds (LRU eviction), never the
//! other way around.
//!
//! Also usable on its own as a TTL-only map where boundedness is not needed.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{CacheError, CacheResult};
use crate::traits::{TimedCache, Timestamp};

/// TTL map that stores everything until it expires.
#[derive(Debug)]
pub struct UnboundedCache<K, V> {
    entries: FxHashMap<K, Stored<V>>,
    current_time: Timestamp,
}

impl<K, V> Default for UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Stored<V> {
    value: V,
    expires_at: Timestamp,
}

impl<K, V> UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty cache at time zero.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            current_time: 0,
        }
    }

    /// Inserts or updates `key`, expiring `ttl` ticks after `now`.
    ///
    /// Same contract as the bounded cache: `now` may not regress, `ttl`
    /// must be positive.
    pub fn insert(&mut self, key: K, value: V, now: Timestamp, ttl: Timestamp) -> CacheResult<()> {
        if now < self.current_time {
            return Err(CacheError::ClockRegression {
                now,
                current: self.current_time,
            });
        }
        if ttl <= 0 {
            return Err(CacheError::DeadOnArrival { ttl });
        }
        self.current_time = now;

        self.entries.insert(
            key,
            Stored {
                value,
                expires_at: now.saturating_add(ttl),
            },
        );
        Ok(())
    }

    /// Looks up `key` at time `now`. An expired entry is dropped on the way
    /// out.
    pub fn get(&mut self, key: &K, now: Timestamp) -> CacheResult<Option<&V>> {
        if now < self.current_time {
            return Err(CacheError::ClockRegression {
                now,
                current: self.current_time,
            });
        }
        self.current_time = now;

        let expired = self
            .entries
            .get(key)
            .is_some_and(|stored| now >= stored.expires_at);
        if expired {
            self.entries.remove(key);
            return Ok(None);
        }
        Ok(self.entries.get(key).map(|stored| &stored.value))
    }

    /// Number of entries held, counting expired entries no lookup has
    /// dropped yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The cache clock: the largest timestamp any operation has carried.
    pub fn current_timestamp(&self) -> Timestamp {
        self.current_time
    }
}

impl<K, V> TimedCache<K, V> for UnboundedCache<K, V>
where
    K: Eq + Hash,
{
    fn insert(&mut self, key: K, value: V, now: Timestamp, ttl: Timestamp) -> CacheResult<()> {
        UnboundedCache::insert(self, key, value, now, ttl)
    }

    fn get(&mut self, key: &K, now: Timestamp) -> CacheResult<Option<&V>> {
        UnboundedCache::get(self, key, now)
    }

    fn len(&self) -> usize {
        UnboundedCache::len(self)
    }

    fn current_timestamp(&self) -> Timestamp {
        UnboundedCache::current_timestamp(self)
    }
}
