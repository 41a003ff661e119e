//! # Timed Cache Surface
//!
//! This module defines the operations shared by every timestamp-driven cache
//! in the crate, so that drivers, examples, and comparison tests can be
//! written once and run against any implementation.
//!
//! ## Architecture
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │            TimedCache<K, V>              │
//!                    │                                          │
//!                    │  insert(&mut, K, V, now, ttl) → Result   │
//!                    │  get(&mut, &K, now) → Result<Option<&V>> │
//!                    │  len(&) → usize                          │
//!                    │  is_empty(&) → bool                      │
//!                    │  current_timestamp(&) → Timestamp        │
//!                    └──────────┬──────────────────┬────────────┘
//!                               │                  │
//!                               ▼                  ▼
//!                    ┌──────────────────┐ ┌──────────────────────┐
//!                    │ TtlCache<K,V,S>  │ │ UnboundedCache<K, V> │
//!                    │ (bounded, LRU)   │ │ (keeps everything)   │
//!                    └──────────────────┘ └──────────────────────┘
//! ```
//!
//! ## Timestamp Model
//!
//! Callers own the clock: every mutating operation takes an explicit
//! [`Timestamp`] and the cache only requires that the sequence of supplied
//! timestamps never decreases. A regressing timestamp is rejected with
//! [`CacheError::ClockRegression`](crate::error::CacheError) before any state
//! changes. [`RealTimeCache`](crate::cache::realtime::RealTimeCache) layers a
//! monotonic clock on top for callers that do not want to thread timestamps
//! by hand.
//!
//! `Timestamp` is signed on purpose: internal bookkeeping reserves small
//! negative values as sentinels, and the non-decreasing clock check keeps
//! every caller-visible timestamp at zero or above.
//!
//! ## Example
//!
//! ```
//! use ttlkit::cache::oracle::UnboundedCache;
//! use ttlkit::cache::ttl_lru::TtlCache;
//! use ttlkit::error::CacheResult;
//! use ttlkit::traits::{TimedCache, Timestamp};
//!
//! fn warm<C: TimedCache<u64, String>>(cache: &mut C, at: Timestamp) -> CacheResult<()> {
//!     cache.insert(1, "one".to_string(), at, 100)?;
//!     cache.insert(2, "two".to_string(), at + 1, 100)?;
//!     Ok(())
//! }
//!
//! let mut bounded: TtlCache<u64, String> = TtlCache::new(16, 0.5).unwrap();
//! let mut unbounded: UnboundedCache<u64, String> = UnboundedCache::new();
//! warm(&mut bounded, 10).unwrap();
//! warm(&mut unbounded, 10).unwrap();
//! assert_eq!(bounded.len(), unbounded.len());
//! ```

use crate::error::CacheResult;

/// Logical cache time, expressed in caller-chosen ticks.
pub type Timestamp = i64;

/// Operations common to every timestamp-driven cache.
///
/// `len` counts entries still held by the implementation, which for the
/// bounded cache may include expired entries that no operation has reclaimed
/// yet.
pub trait TimedCache<K, V> {
    /// Inserts or updates `key`, expiring `ttl` ticks after `now`.
    ///
    /// Fails with `ClockRegression` if `now` is earlier than the cache clock
    /// and with `DeadOnArrival` if `ttl` is not positive.
    fn insert(&mut self, key: K, value: V, now: Timestamp, ttl: Timestamp) -> CacheResult<()>;

    /// Looks up `key` at time `now`, returning its live value if any.
    ///
    /// Fails with `ClockRegression` if `now` is earlier than the cache clock.
    fn get(&mut self, key: &K, now: Timestamp) -> CacheResult<Option<&V>>;

    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cache clock: the largest timestamp any operation has carried.
    fn current_timestamp(&self) -> Timestamp;
}
