//! Injectable time source.
//!
//! Anything that needs "now" takes it from a [`Clock`] rather than calling
//! `Utc::now()` directly, so status transitions can be tested deterministically.

use std::sync::Mutex;

use chrono::Utc;

use crate::types::Timestamp;

/// A source of the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// A clock that returns a settable instant. Used by tests.
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<Timestamp>,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    /// Replace the current instant.
    pub fn set(&self, instant: Timestamp) {
        *self.lock() = instant;
    }

    /// Move the current instant forward by `secs` seconds.
    pub fn advance_secs(&self, secs: i64) {
        let mut guard = self.lock();
        *guard += chrono::Duration::seconds(secs);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Timestamp> {
        // A poisoned lock still holds a valid timestamp.
        self.instant.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.lock()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fixed_clock_returns_set_instant() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let clock = FixedClock::new(t0);
        assert_eq!(clock.now(), t0);

        clock.advance_secs(45);
        assert_eq!(clock.now(), t0 + chrono::Duration::seconds(45));

        clock.set(t0);
        assert_eq!(clock.now(), t0);
    }
}
