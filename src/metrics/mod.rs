pub mod metrics_impl;
pub mod snapshot;

pub use metrics_impl::TtlMetrics;
pub use snapshot::TtlMetricsSnapshot;
