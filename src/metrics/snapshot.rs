//! Point-in-time copies of the cache counters plus gauges.

/// Snapshot of [`TtlMetrics`](crate::metrics::metrics_impl::TtlMetrics)
/// counters together with gauges captured at snapshot time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TtlMetricsSnapshot {
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

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl TtlMetricsSnapshot {
    /// Hit fraction over all lookups, or `None` before the first lookup.
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.get_hits + self.get_misses;
        (total > 0).then(|| self.get_hits as f64 / total as f64)
    }
}
