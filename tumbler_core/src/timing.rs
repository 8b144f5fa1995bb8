use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds without new coverage after which splicing is favoured.
pub const STALE_COVERAGE_SECS: u64 = 5;

/// Read-only view of the shared "last new coverage" timestamp.
pub trait CoverageClock: Send + Sync {
    fn secs_since_last_cov(&self) -> u64;

    fn is_stale(&self) -> bool {
        self.secs_since_last_cov() > STALE_COVERAGE_SECS
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Atomic UNIX timestamp, updated by whoever observes new coverage.
#[derive(Debug)]
pub struct CovTimestamp {
    last_cov_update: AtomicU64,
}

impl CovTimestamp {
    /// Starts the clock at the current time.
    pub fn new() -> Self {
        Self::at(unix_now())
    }

    pub fn at(unix_secs: u64) -> Self {
        Self {
            last_cov_update: AtomicU64::new(unix_secs),
        }
    }

    pub fn mark_new_coverage(&self) {
        self.last_cov_update.store(unix_now(), Ordering::Release);
    }

    pub fn last_cov_update(&self) -> u64 {
        self.last_cov_update.load(Ordering::Acquire)
    }
}

impl Default for CovTimestamp {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageClock for CovTimestamp {
    fn secs_since_last_cov(&self) -> u64 {
        unix_now().saturating_sub(self.last_cov_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_clock_is_not_stale() {
        let clock = CovTimestamp::new();
        assert!(clock.secs_since_last_cov() <= 1);
        assert!(!clock.is_stale());
    }

    #[test]
    fn old_timestamp_is_stale_until_marked() {
        let clock = CovTimestamp::at(unix_now() - 60);
        assert!(clock.is_stale());
        clock.mark_new_coverage();
        assert!(!clock.is_stale());
    }

    #[test]
    fn future_timestamp_saturates_to_zero() {
        let clock = CovTimestamp::at(u64::MAX);
        assert_eq!(clock.secs_since_last_cov(), 0);
    }
}
