pub use crate::cache::{RealTimeCache, TtlCache, UnboundedCache};
pub use crate::ds::{EntryId, EntryList};
pub use crate::error::{CacheError, CacheResult};
pub use crate::traits::{TimedCache, Timestamp};

#[cfg(feature = "metrics")]
pub use crate::metrics::TtlMetricsSnapshot;
