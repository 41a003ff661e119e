//! ttlkit: bounded in-memory caching with LRU eviction and TTL expiration.
//!
//! The core type is [`cache::ttl_lru::TtlCache`], an open-addressing hash
//! table whose entries expire and whose capacity is enforced by LRU
//! eviction. [`cache::realtime::RealTimeCache`] layers a monotonic clock on
//! top; [`cache::oracle::UnboundedCache`] is the save-everything reference
//! used to cross-check it.

pub mod cache;
pub mod ds;
pub mod error;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
