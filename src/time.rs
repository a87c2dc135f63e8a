//! Time stamps used to mark when property values were produced and when
//! consumers last checked them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A moment on the producer's clock, split into whole seconds and a
/// nanosecond remainder.
///
/// The derived `Ord` is lexicographic on `(secs, nanos)`, which is the total
/// order all freshness checks rely on. `TimeUnit::default()` is the `(0, 0)`
/// sentinel meaning "never checked / unset".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct TimeUnit {
    secs: u64,
    nanos: u64,
}

pub const NANOS_PER_SEC: u64 = 1_000_000_000;

impl TimeUnit {
    /// Create a time unit, normalizing `nanos` into the sub-second range.
    #[inline]
    pub fn new(secs: u64, nanos: u64) -> Self {
        Self {
            secs: secs.saturating_add(nanos / NANOS_PER_SEC),
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    /// The `(0, 0)` sentinel: "no prior check, anything counts as new".
    #[inline]
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Whole seconds part.
    #[inline]
    pub fn seconds(&self) -> u64 {
        self.secs
    }

    /// Nanosecond remainder, always `< 1_000_000_000`.
    #[inline]
    pub fn subsec_nanos(&self) -> u64 {
        self.nanos
    }

    /// Whether this is the "never checked / unset" sentinel.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    /// Total time as fractional seconds, for diagnostics.
    #[inline]
    pub fn as_seconds_f64(&self) -> f64 {
        self.secs as f64 + self.nanos as f64 / NANOS_PER_SEC as f64
    }
}

impl From<Duration> for TimeUnit {
    #[inline]
    fn from(duration: Duration) -> Self {
        Self::new(duration.as_secs(), duration.subsec_nanos() as u64)
    }
}

impl From<TimeUnit> for Duration {
    #[inline]
    fn from(time: TimeUnit) -> Self {
        Duration::new(time.secs, time.nanos as u32)
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:09}s", self.secs, self.nanos)
    }
}
