pub mod oracle;
pub mod realtime;
pub mod ttl_lru;

pub use oracle::UnboundedCache;
pub use realtime::RealTimeCache;
pub use ttl_lru::TtlCache;
