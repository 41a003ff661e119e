//! Operation counters for the TTL cache.
//!
//! Recording is plain field increments on the single-threaded cache core;
//! consumption goes through [`TtlMetricsSnapshot`](crate::metrics::snapshot::TtlMetricsSnapshot),
//! which copies the counters together with point-in-time gauges. Counters are
//! cumulative over the cache's lifetime.

/// Counters recorded by `TtlCache` while it runs.
#[derive(Debug, Default)]
pub struct TtlMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub lru_evictions: u64,
    pub expired_entries: u64,
    pub clusters_repaired: u64,
    pub slots_relocated: u64,
    pub expire_calls: u64,
    pub expire_rounds: u64,
    pub sampled_slots: u64,
}

impl TtlMetrics {
    #[inline]
    pub fn record_get_call(&mut self) {
        self.get_calls += 1;
    }

    #[inline]
    pub fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    #[inline]
    pub fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    #[inline]
    pub fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    #[inline]
    pub fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    #[inline]
    pub fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    #[inline]
    pub fn record_lru_eviction(&mut self) {
        self.lru_evictions += 1;
    }

    #[inline]
    pub fn record_expired_entry(&mut self) {
        self.expired_entries += 1;
    }

    #[inline]
    pub fn record_cluster_repaired(&mut self) {
        self.clusters_repaired += 1;
    }

    #[inline]
    pub fn record_slot_relocated(&mut self) {
        self.slots_relocated += 1;
    }

    #[inline]
    pub fn record_expire_call(&mut self) {
        self.expire_calls += 1;
    }

    #[inline]
    pub fn record_expire_round(&mut self) {
        self.expire_rounds += 1;
    }

    #[inline]
    pub fn record_sampled_slots(&mut self, count: u64) {
        self.sampled_slots += count;
    }
}
