//! Ledger clocks.
//!
//! The substrate, not the chaincode, decides an invocation's timestamp.

use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of transaction timestamps.
pub trait LedgerClock: Send + Sync {
    /// Timestamp for the next transaction.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl LedgerClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock: `start`, `start + step`, `start + 2*step`, ...
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: Duration,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// Create a clock starting at `start` advancing by `step` per call.
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            start,
            step,
            ticks: AtomicI64::new(0),
        }
    }

    /// Clock starting at the Unix epoch plus `start_secs`, one second per tick.
    pub fn from_unix_secs(start_secs: i64) -> Self {
        Self::new(
            DateTime::<Utc>::from_timestamp(start_secs, 0).unwrap_or_default(),
            Duration::seconds(1),
        )
    }
}

impl LedgerClock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + self.step * tick as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepping_clock_advances() {
        let clock = SteppingClock::from_unix_secs(1_700_000_000);
        assert_eq!(clock.now().timestamp(), 1_700_000_000);
        assert_eq!(clock.now().timestamp(), 1_700_000_001);
        assert_eq!(clock.now().timestamp(), 1_700_000_002);
    }
}
