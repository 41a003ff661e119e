//! Error types for the ttlkit library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned when a caller breaks a cache contract
//!   (regressing timestamps, non-positive TTLs, out-of-range construction
//!   parameters, unreachable expiry targets).
//!
//! Every public cache operation validates its arguments before touching any
//! state, so a returned error always leaves the cache exactly as it was,
//! clock included. There is no transient or retryable error category: each
//! variant signals programmer misuse at the call site.
//!
//! ## Example Usage
//!
//! ```
//! use ttlkit::cache::ttl_lru::TtlCache;
//! use ttlkit::error::CacheError;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<TtlCache<String, i32>, CacheError> = TtlCache::new(100, 0.25);
//! assert!(cache.is_ok());
//!
//! // An out-of-range load factor is caught without panicking
//! let bad = TtlCache::<String, i32>::new(100, 0.9);
//! assert!(matches!(bad, Err(CacheError::BadLoadFactor { .. })));
//! ```

use std::fmt;

use crate::traits::Timestamp;

/// Contract violation detected by a cache operation.
///
/// Carries the offending argument so callers can report exactly what was
/// rejected. An operation that returns a `CacheError` has not mutated the
/// cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CacheError {
    /// A call carried a timestamp earlier than the cache clock.
    ClockRegression {
        /// The timestamp supplied by the caller.
        now: Timestamp,
        /// The cache clock at the time of the call.
        current: Timestamp,
    },

    /// An insertion arrived with a TTL of zero or less, so the entry would
    /// already be expired.
    DeadOnArrival {
        /// The rejected time-to-live.
        ttl: Timestamp,
    },

    /// The maximum load factor is outside the supported `[0.01, 0.5]` range.
    BadLoadFactor {
        /// The rejected load factor.
        max_load_factor: f64,
    },

    /// Fewer than two entries were requested at construction.
    InsufficientCapacity {
        /// The rejected entry ceiling.
        max_entries: usize,
    },

    /// A bulk-expire target ratio below the 0.01 floor. The sampling loop's
    /// cost grows quadratically as the target shrinks, so smaller ratios are
    /// rejected outright.
    UnreachableTarget {
        /// The rejected target ratio.
        target_ratio: f64,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CacheError::ClockRegression { now, current } => {
                write!(f, "timestamp {now} is earlier than the cache clock {current}")
            }
            CacheError::DeadOnArrival { ttl } => {
                write!(f, "ttl must be positive, got {ttl}")
            }
            CacheError::BadLoadFactor { max_load_factor } => {
                write!(f, "max load factor must be in [0.01, 0.5], got {max_load_factor}")
            }
            CacheError::InsufficientCapacity { max_entries } => {
                write!(f, "cache must hold at least 2 entries, got {max_entries}")
            }
            CacheError::UnreachableTarget { target_ratio } => {
                write!(f, "expiry target ratio must be at least 0.01, got {target_ratio}")
            }
        }
    }
}

impl std::error::Error for CacheError {}

/// Syntactic sugar for `Result<T, CacheError>`.
pub type CacheResult<T> = Result<T, CacheError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_argument() {
        let err = CacheError::ClockRegression { now: 3, current: 7 };
        assert_eq!(err.to_string(), "timestamp 3 is earlier than the cache clock 7");

        let err = CacheError::DeadOnArrival { ttl: -1 };
        assert_eq!(err.to_string(), "ttl must be positive, got -1");

        let err = CacheError::UnreachableTarget { target_ratio: 0.001 };
        assert!(err.to_string().contains("0.001"));
    }

    #[test]
    fn debug_includes_variant_name() {
        let err = CacheError::BadLoadFactor { max_load_factor: 0.9 };
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("BadLoadFactor"));
    }

    #[test]
    fn copy_and_eq() {
        let a = CacheError::InsufficientCapacity { max_entries: 1 };
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CacheError>();
    }
}
