//! # TTL + LRU Cache Core
//!
//! Bounded key→value cache combining LRU eviction with per-entry TTL
//! expiration, built on an open-addressing hash table with linear probing.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────────┐
//!   │                         TtlCache<K, V, S>                         │
//!   │                                                                   │
//!   │   ┌─────────────────────────────────────────────────────────────┐ │
//!   │   │  slots: Box<[Option<Slot>]>   (linear probing, fixed size)  │ │
//!   │   │                                                             │ │
//!   │   │  ┌───────┬──────────────────────────────────────────┐      │ │
//!   │   │  │ index │  Slot { entry, hash, expires_at }        │      │ │
//!   │   │  ├───────┼──────────────────────────────────────────┤      │ │
//!   │   │  │   0   │  entry: id_2 ──────────────────────┐     │      │ │
//!   │   │  │   1   │  (empty)                           │     │      │ │
//!   │   │  │   2   │  entry: id_0 ────────────────┐     │     │      │ │
//!   │   │  │   3   │  entry: id_1 ──────────┐     │     │     │      │ │
//!   │   │  └───────┴────────────────────────┼─────┼─────┼─────┘      │ │
//!   │   └───────────────────────────────────┼─────┼─────┼────────────┘ │
//!   │                                       ▼     ▼     ▼              │
//!   │   ┌─────────────────────────────────────────────────────────────┐ │
//!   │   │  entries: EntryList<(K, V)>   (cell slab + recency links)   │ │
//!   │   │                                                             │ │
//!   │   │  oldest ─► [id_0] ◄──► [id_1] ◄──► [id_2] ◄── newest        │ │
//!   │   │            (next eviction)         (most recently used)     │ │
//!   │   └─────────────────────────────────────────────────────────────┘ │
//!   └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! | Component            | Description                                       |
//! |----------------------|---------------------------------------------------|
//! | `TtlCache<K, V, S>`  | Single-threaded cache core                        |
//! | `Slot`               | Three-word probe record: entry id, hash, expiry   |
//! | `EntryList<(K, V)>`  | Owns the key/value pairs, ordered oldest→newest   |
//! | `Timestamp`          | Caller-supplied logical clock (`i64` ticks)       |
//!
//! Slot records deliberately stay small so that linear probing touches only
//! the slot array; the key and value are reached through the entry handle
//! only once the cached hash already matches.
//!
//! ## Time Model
//!
//! Every public operation carries a timestamp and advances the cache clock
//! to it. Timestamps must never decrease; a regressing call fails with
//! `ClockRegression` before any state changes. Expiry is absolute:
//! an entry inserted at `t` with time-to-live `ttl` is live while
//! `now < t + ttl`.
//!
//! Expiration happens on two paths:
//!
//! - **Passive**: `get` and `insert` first repair the cluster around the
//!   touched key's ideal slot, reclaiming any expired entries sitting in it.
//!   Hot clusters therefore clean themselves.
//! - **Active**: [`TtlCache::remove_expired`] samples random clusters and
//!   repairs them until the measured expired fraction drops to the caller's
//!   target, relieving cold clusters that no lookup would ever touch.
//!
//! ## Cluster Repair
//!
//! Deleting from an open-addressing table must not leave a hole between any
//! key's ideal slot and the slot it actually occupies. Repair runs in two
//! passes over one cluster (a maximal run of occupied slots):
//!
//! ```text
//!   slots:      0    1    2    3    4    5      A,B ideal 2 — C ideal 3
//!   before:    [ ]  [ ]  [A]  [B]  [C]  [ ]     A expired
//!   pass 1:    [ ]  [ ]  [ ]  [B]  [C]  [ ]     purge: hole at 2 breaks B, C
//!   pass 2:    [ ]  [ ]  [B]  [C]  [ ]  [ ]     compact: B → 2, C → 3
//! ```
//!
//! Pass 2 walks left to right from the first hole and moves each survivor to
//! the earliest empty slot at or after its ideal index, never past it.
//! Survivors keep their relative probe order, so the result is equivalent to
//! having re-inserted them in order — a batched form of backward-shift
//! deletion.
//!
//! LRU eviction rides the same path: the evictor stamps the victim's slot
//! with a sentinel expiry and calls the repair routine, so there is exactly
//! one deletion code path to keep correct.
//!
//! ## Method Summary
//!
//! | Method                | Complexity | Description                            |
//! |-----------------------|------------|----------------------------------------|
//! | `new(n, load)`        | O(n)       | Allocate table of `ceil(n / load)`     |
//! | `insert(k, v, t, ttl)`| O(1) avg   | Insert or refresh, may evict LRU       |
//! | `get(&k, t)`          | O(1) avg   | Lookup + move to newest                |
//! | `remove_expired(t, r)`| amortized  | Sampling bulk expiry                   |
//! | `lru_order()`         | O(n)       | Keys oldest→newest (introspection)     |
//! | `len` / `load_factor` | O(1)       | Includes not-yet-reclaimed expired     |
//!
//! ## Design Rationale
//!
//! - **Slab handles, no raw pointers**: the entry list owns the key/value
//!   pairs in reusable cells and hands out stable `EntryId`s; slots store
//!   the id plus the cached hash. The whole core is safe Rust and
//!   `Send`/`Sync` follow from the field types.
//! - **Fixed capacity**: the table never rehashes. The load factor is capped
//!   at 0.5, which bounds probe lengths and guarantees every probe loop
//!   terminates at an empty slot.
//! - **Sentinel eviction**: `LRU_EVICTED` unifies eviction with expiration;
//!   the alternative (a parallel deletion routine) is the kind of duplicate
//!   that drifts.
//!
//! ## Example Usage
//!
//! ```
//! use ttlkit::cache::ttl_lru::TtlCache;
//!
//! let mut cache: TtlCache<&str, i32> = TtlCache::new(100, 0.25).unwrap();
//!
//! cache.insert("a", 1, 10, 5).unwrap();       // live until t = 15
//! assert_eq!(cache.get(&"a", 12).unwrap(), Some(&1));
//!
//! // at t = 15 the entry has expired
//! assert_eq!(cache.get(&"a", 15).unwrap(), None);
//!
//! // timestamps may never regress
//! assert!(cache.get(&"a", 14).is_err());
//! ```
//!
//! ## Thread Safety
//!
//! `TtlCache` is **not** thread-safe and provides no locking; callers that
//! need shared access wrap it in their own synchronization.

use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use rustc_hash::FxHasher;

use crate::ds::entry_list::{EntryId, EntryList};
use crate::ds::probe::{displacement, hash_to_index, next_index, prev_index};
use crate::error::{CacheError, CacheResult};
#[cfg(feature = "metrics")]
use crate::metrics::{TtlMetrics, TtlMetricsSnapshot};
use crate::traits::{TimedCache, Timestamp};

/// Default hasher state: FxHash, the same non-cryptographic hasher the rest
/// of the crate uses for its maps.
pub type DefaultHashBuilder = BuildHasherDefault<FxHasher>;

/// Expiry sentinel written by the LRU evictor. The victim then looks expired
/// to cluster repair and is reclaimed through the ordinary expiration path.
/// Caller-visible expiries are always `> 0` (clock ≥ 0, ttl ≥ 1), so the
/// sentinel can never collide with a real one.
const LRU_EVICTED: Timestamp = -2;

/// Below this table load, bulk expiry stops: random probing would mostly
/// hit empty slots.
const MIN_SAMPLING_LOAD: f64 = 0.1;

/// Below this many live entries, bulk expiry is not worth sampling.
const MIN_SAMPLING_LEN: usize = 20;

/// Each sampling round visits whole clusters until at least this many slots
/// are covered.
const SAMPLE_SLOTS_PER_ROUND: usize = 20;

/// Probe record. Holds no key/value data; `hash` short-circuits key
/// comparisons and recomputes the ideal slot during repair, `expires_at`
/// makes expiry checks possible without touching the entry.
#[derive(Debug, Clone, Copy)]
struct Slot {
    entry: EntryId,
    hash: u64,
    expires_at: Timestamp,
}

/// Bounded single-threaded cache with LRU eviction and TTL expiration.
///
/// See the [module documentation](self) for the data layout and the
/// expiration model.
pub struct TtlCache<K, V, S = DefaultHashBuilder> {
    slots: Box<[Option<Slot>]>,
    entries: EntryList<(K, V)>,
    hash_builder: S,
    max_load_factor: f64,
    current_time: Timestamp,
    rng_state: u64,
    #[cfg(feature = "metrics")]
    metrics: TtlMetrics,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
{
    /// Creates a cache that holds at most `max_entries` live entries.
    ///
    /// The slot table is sized `ceil(max_entries / max_load_factor)` and
    /// never grows. `max_load_factor` must lie in `[0.01, 0.5]` and
    /// `max_entries` must be at least 2.
    ///
    /// # Example
    ///
    /// ```
    /// use ttlkit::cache::ttl_lru::TtlCache;
    ///
    /// let cache: TtlCache<u64, String> = TtlCache::new(100, 0.25).unwrap();
    /// assert_eq!(cache.capacity(), 400);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(max_entries: usize, max_load_factor: f64) -> CacheResult<Self> {
        Self::with_hasher(max_entries, max_load_factor, DefaultHashBuilder::default())
    }
}

impl<K, V, S> TtlCache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Like [`TtlCache::new`], with a caller-supplied hasher state.
    ///
    /// The hasher must be deterministic for the cache's lifetime: the table
    /// caches each key's hash and recomputes ideal slots from it during
    /// cluster repair.
    pub fn with_hasher(
        max_entries: usize,
        max_load_factor: f64,
        hash_builder: S,
    ) -> CacheResult<Self> {
        if !(0.01..=0.5).contains(&max_load_factor) {
            return Err(CacheError::BadLoadFactor { max_load_factor });
        }
        if max_entries < 2 {
            return Err(CacheError::InsufficientCapacity { max_entries });
        }
        let capacity = (max_entries as f64 / max_load_factor).ceil() as usize;

        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
            entries: EntryList::with_capacity(max_entries),
            hash_builder,
            max_load_factor,
            current_time: 0,
            rng_state: (capacity as u64).wrapping_add(0x9e37_79b9_7f4a_7c15),
            #[cfg(feature = "metrics")]
            metrics: TtlMetrics::default(),
        })
    }

    /// Looks up `key` at time `now` and marks it most recently used.
    ///
    /// Repairs the cluster at the key's ideal slot first, so expired entries
    /// in it (including an expired mapping for `key` itself) are reclaimed
    /// before the lookup.
    ///
    /// # Errors
    ///
    /// `ClockRegression` if `now` is earlier than the cache clock; the cache
    /// is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use ttlkit::cache::ttl_lru::TtlCache;
    ///
    /// let mut cache: TtlCache<&str, i32> = TtlCache::new(10, 0.5).unwrap();
    /// cache.insert("k", 1, 1, 100).unwrap();
    ///
    /// assert_eq!(cache.get(&"k", 2).unwrap(), Some(&1));
    /// assert_eq!(cache.get(&"missing", 3).unwrap(), None);
    /// ```
    pub fn get(&mut self, key: &K, now: Timestamp) -> CacheResult<Option<&V>> {
        if now < self.current_time {
            return Err(CacheError::ClockRegression {
                now,
                current: self.current_time,
            });
        }
        self.current_time = now;
        #[cfg(feature = "metrics")]
        self.metrics.record_get_call();

        let hash = self.hash_key(key);
        let ideal = hash_to_index(hash, self.slots.len());
        self.fix_cluster(ideal);

        if let Some((_, entry)) = self.find_key(key, hash) {
            self.entries.move_to_newest(entry);
            #[cfg(feature = "metrics")]
            self.metrics.record_get_hit();
            return Ok(self.entries.get(entry).map(|(_, value)| value));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_get_miss();
        Ok(None)
    }

    /// Inserts `key` at time `now`, expiring `ttl` ticks later, and marks it
    /// most recently used.
    ///
    /// An existing mapping is updated in place and its expiry refreshed to
    /// `now + ttl`. If a new entry would push the table past its load-factor
    /// ceiling, the least recently used entry is evicted first.
    ///
    /// # Errors
    ///
    /// `ClockRegression` if `now` is earlier than the cache clock,
    /// `DeadOnArrival` if `ttl` is not positive. Either way the cache is
    /// left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use ttlkit::cache::ttl_lru::TtlCache;
    ///
    /// let mut cache: TtlCache<&str, i32> = TtlCache::new(10, 0.5).unwrap();
    /// cache.insert("k", 1, 1, 5).unwrap();
    /// cache.insert("k", 2, 3, 5).unwrap();    // refresh: now live until t = 8
    ///
    /// assert_eq!(cache.get(&"k", 7).unwrap(), Some(&2));
    /// assert!(cache.insert("dead", 0, 9, 0).is_err());
    /// ```
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
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let hash = self.hash_key(&key);
        let capacity = self.slots.len();
        let ideal = hash_to_index(hash, capacity);
        self.fix_cluster(ideal);

        if (self.entries.len() + 1) as f64 > self.max_load_factor * capacity as f64 {
            self.evict_oldest();
        }

        let expires_at = now.saturating_add(ttl);
        if let Some((index, entry)) = self.find_key(&key, hash) {
            if let Some(slot) = self.slots[index].as_mut() {
                slot.expires_at = expires_at;
            }
            if let Some((_, stored)) = self.entries.get_mut(entry) {
                *stored = value;
            }
            self.entries.move_to_newest(entry);
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return Ok(());
        }

        let index = self.next_empty(ideal);
        let entry = self.entries.push_newest((key, value));
        self.slots[index] = Some(Slot {
            entry,
            hash,
            expires_at,
        });
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        debug_assert!(self.slots[index].is_some());
        Ok(())
    }

    /// Reclaims expired entries by sampling, until the measured expired
    /// fraction drops to `target_ratio`. Returns how many entries were
    /// removed.
    ///
    /// Each round draws random slots, extends them to whole clusters until
    /// at least 20 distinct slots are covered, repairs those clusters, and
    /// measures the expired fraction of the sample. The loop stops when the
    /// fraction is at or below `target_ratio`, when fewer than 20 entries
    /// remain, or when the table load drops under 0.1 — at that point random
    /// probing mostly hits empty slots and the remaining expired entries are
    /// left for passive reclamation.
    ///
    /// The call is advisory: some expired entries may survive it. Run it
    /// under memory pressure, not for correctness — lookups never return
    /// expired values regardless.
    ///
    /// # Errors
    ///
    /// `ClockRegression` if `now` is earlier than the cache clock,
    /// `UnreachableTarget` if `target_ratio < 0.01` (the sampling cost grows
    /// quadratically as the target shrinks). Either way the cache is left
    /// untouched.
    pub fn remove_expired(&mut self, now: Timestamp, target_ratio: f64) -> CacheResult<usize> {
        if now < self.current_time {
            return Err(CacheError::ClockRegression {
                now,
                current: self.current_time,
            });
        }
        if target_ratio < 0.01 {
            return Err(CacheError::UnreachableTarget { target_ratio });
        }
        self.current_time = now;
        #[cfg(feature = "metrics")]
        self.metrics.record_expire_call();

        let capacity = self.slots.len();
        let mut total_removed = 0usize;

        while self.load_factor() >= MIN_SAMPLING_LOAD && self.entries.len() >= MIN_SAMPLING_LEN {
            // Collect distinct clusters until the sample covers enough slots.
            // Attempts are bounded: a table too sparse to sample efficiently
            // ends the call early, even if expired entries remain.
            let mut cluster_starts: Vec<usize> = Vec::new();
            let mut sampled_slots = 0usize;
            let mut attempts = 0usize;
            while sampled_slots < SAMPLE_SLOTS_PER_ROUND && attempts < capacity {
                attempts += 1;
                let index = (self.next_random() % capacity as u64) as usize;
                if self.slots[index].is_none() {
                    continue;
                }
                let start = self.cluster_start(index);
                if cluster_starts.contains(&start) {
                    continue;
                }
                sampled_slots += self.cluster_len(start);
                cluster_starts.push(start);
            }
            if sampled_slots == 0 {
                break;
            }
            let exhausted = sampled_slots < SAMPLE_SLOTS_PER_ROUND;

            #[cfg(feature = "metrics")]
            {
                self.metrics.record_expire_round();
                self.metrics.record_sampled_slots(sampled_slots as u64);
            }

            let before = self.entries.len();
            for &start in &cluster_starts {
                self.fix_cluster(start);
            }
            let removed = before - self.entries.len();
            total_removed += removed;

            let expired_ratio = removed as f64 / sampled_slots as f64;
            if exhausted || expired_ratio <= target_ratio {
                break;
            }
        }

        Ok(total_removed)
    }

    /// Number of entries currently in the table, counting expired entries
    /// that no operation has reclaimed yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the slot table. Fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current table load: `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.entries.len() as f64 / self.slots.len() as f64
    }

    /// The cache clock: the largest timestamp any operation has carried.
    pub fn current_timestamp(&self) -> Timestamp {
        self.current_time
    }

    /// Keys in recency order, least recently used first.
    ///
    /// Introspection for tests and diagnostics; no other iteration order is
    /// exposed.
    pub fn lru_order(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    #[cfg(feature = "metrics")]
    /// Copies the operation counters together with point-in-time gauges.
    pub fn metrics_snapshot(&self) -> TtlMetricsSnapshot {
        TtlMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            lru_evictions: self.metrics.lru_evictions,
            expired_entries: self.metrics.expired_entries,
            clusters_repaired: self.metrics.clusters_repaired,
            slots_relocated: self.metrics.slots_relocated,
            expire_calls: self.metrics.expire_calls,
            expire_rounds: self.metrics.expire_rounds,
            sampled_slots: self.metrics.sampled_slots,
            cache_len: self.entries.len(),
            capacity: self.slots.len(),
        }
    }

    // -- probing helpers ----------------------------------------------------

    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_builder.hash_one(key)
    }

    #[inline]
    fn is_occupied(&self, index: usize) -> bool {
        self.slots[index].is_some()
    }

    /// First slot of the cluster containing `index`.
    ///
    /// Terminates because the load factor cap guarantees empty slots exist.
    fn cluster_start(&self, mut index: usize) -> usize {
        debug_assert!(self.is_occupied(index));
        let capacity = self.slots.len();
        while self.is_occupied(prev_index(index, capacity)) {
            index = prev_index(index, capacity);
        }
        index
    }

    /// Number of occupied slots from `start` to the cluster's end.
    fn cluster_len(&self, start: usize) -> usize {
        let capacity = self.slots.len();
        let mut len = 0;
        let mut index = start;
        while self.is_occupied(index) {
            len += 1;
            index = next_index(index, capacity);
        }
        len
    }

    /// First empty slot probing forward from `index`.
    fn next_empty(&self, mut index: usize) -> usize {
        let capacity = self.slots.len();
        while self.is_occupied(index) {
            index = next_index(index, capacity);
        }
        index
    }

    /// Probes for `key` from its ideal slot. Compares cached hashes first;
    /// the key itself is only compared on a hash match. Returns the slot
    /// index and the entry id.
    fn find_key(&self, key: &K, hash: u64) -> Option<(usize, EntryId)> {
        let capacity = self.slots.len();
        let mut index = hash_to_index(hash, capacity);
        while let Some(slot) = &self.slots[index] {
            if slot.hash == hash && self.entries.get(slot.entry).is_some_and(|(k, _)| k == key) {
                return Some((index, slot.entry));
            }
            index = next_index(index, capacity);
        }
        None
    }

    #[inline]
    fn is_expired(&self, slot: &Slot) -> bool {
        self.current_time >= slot.expires_at
    }

    // -- reclamation --------------------------------------------------------

    /// Repairs the cluster containing `index`: reclaims every expired entry
    /// in it, then compacts the survivors so that no key has an empty slot
    /// between its ideal position and its actual position. A no-op when
    /// `index` is empty.
    fn fix_cluster(&mut self, index: usize) {
        if self.slots[index].is_none() {
            return;
        }
        let capacity = self.slots.len();

        // Pass 1: reclaim expired entries, leaving survivors in place.
        let start = self.cluster_start(index);
        let mut first_removed: Option<usize> = None;
        let mut cursor = start;
        while let Some(slot) = self.slots[cursor] {
            if self.is_expired(&slot) {
                self.slots[cursor] = None;
                self.entries.remove(slot.entry);
                if first_removed.is_none() {
                    first_removed = Some(cursor);
                }
                #[cfg(feature = "metrics")]
                {
                    if slot.expires_at != LRU_EVICTED {
                        self.metrics.record_expired_entry();
                    }
                }
            }
            cursor = next_index(cursor, capacity);
        }
        let cluster_end = cursor;

        let Some(first_removed) = first_removed else {
            return;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_cluster_repaired();

        // Pass 2: walk the rest of the cluster left to right, moving each
        // survivor to the earliest empty slot probing forward from its ideal
        // index and stopping at its current position. Survivors keep their
        // relative probe order and never cross their ideal slot, which is
        // what restores the open-addressing invariant.
        let mut cursor = next_index(first_removed, capacity);
        while cursor != cluster_end {
            if let Some(slot) = self.slots[cursor] {
                let ideal = hash_to_index(slot.hash, capacity);
                if ideal != cursor {
                    let mut target = ideal;
                    while target != cursor && self.slots[target].is_some() {
                        target = next_index(target, capacity);
                    }
                    if target != cursor {
                        self.slots[target] = Some(slot);
                        self.slots[cursor] = None;
                        #[cfg(feature = "metrics")]
                        self.metrics.record_slot_relocated();
                    }
                }
            }
            cursor = next_index(cursor, capacity);
        }
    }

    /// Evicts the least recently used entry by stamping its slot with the
    /// eviction sentinel and repairing that cluster, so eviction reuses the
    /// expiration path.
    fn evict_oldest(&mut self) {
        debug_assert!(!self.entries.is_empty());
        let index = self
            .entries
            .oldest_id()
            .and_then(|id| self.entries.get(id))
            .and_then(|(key, _)| self.find_key(key, self.hash_key(key)))
            .map(|(index, _)| index);
        let Some(index) = index else {
            debug_assert!(false, "oldest entry has no slot");
            return;
        };

        if let Some(slot) = self.slots[index].as_mut() {
            slot.expires_at = LRU_EVICTED;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_lru_eviction();
        self.fix_cluster(index);
    }

    /// XorShift64 step. Fast, deterministic, and free of system-time reads,
    /// which keeps bulk expiry reproducible under test.
    #[inline]
    fn next_random(&mut self) -> u64 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng_state = x;
        x
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let capacity = self.slots.len();

        // size agreement: occupied slots == list length
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.entries.len());

        // load bound
        let ceiling = (self.max_load_factor * capacity as f64).floor() as usize;
        assert!(self.entries.len() <= ceiling);

        let mut seen = std::collections::HashSet::new();
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(slot) = slot else { continue };

            // slot ↔ list bijection
            assert!(seen.insert(slot.entry), "two slots share an entry");
            let (key, _) = self
                .entries
                .get(slot.entry)
                .expect("slot points at a dead entry");

            // cached hash matches the key
            assert_eq!(self.hash_key(key), slot.hash);

            // open addressing: no hole between ideal and actual slot
            let ideal = hash_to_index(slot.hash, capacity);
            let mut probe = ideal;
            for _ in 0..displacement(index, ideal, capacity) {
                assert!(
                    self.slots[probe].is_some(),
                    "hole inside the probe sequence for slot {index}"
                );
                probe = next_index(probe, capacity);
            }
        }
        assert_eq!(seen.len(), self.entries.len());

        self.entries.debug_validate_invariants();
    }
}

impl<K, V, S> TimedCache<K, V> for TtlCache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V, now: Timestamp, ttl: Timestamp) -> CacheResult<()> {
        TtlCache::insert(self, key, value, now, ttl)
    }

    fn get(&mut self, key: &K, now: Timestamp) -> CacheResult<Option<&V>> {
        TtlCache::get(self, key, now)
    }

    fn len(&self) -> usize {
        TtlCache::len(self)
    }

    fn current_timestamp(&self) -> Timestamp {
        TtlCache::current_timestamp(self)
    }
}

impl<K, V, S> fmt::Debug for TtlCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.slots.len())
            .field("current_time", &self.current_time)
            .finish_non_exhaustive()
    }
}
