//! Rolling health level over a tool's most recent readings.
//!
//! Every reading in the window is classified independently. The level is a
//! rate + floor hybrid: three or more failures (or warnings) always
//! escalate, and beyond that the failure and warning rates decide.
//!
//! | Level | Condition (first match wins)                                   |
//! |-------|----------------------------------------------------------------|
//! | HIGH  | failure rate >= 10% or failures >= 3                           |
//! | MED   | failure rate >= 2% or warning rate >= 10% or warnings >= 3     |
//! | LOW   | otherwise, including an empty window                           |
//!
//! Rates are compared with integer cross-multiplication so that a window of
//! 50 with one failure lands exactly on 2%.

use serde::{Deserialize, Serialize};

use crate::classification::{classify, ClassifierThresholds, SensorValues, Severity};

/// Default number of readings in a health window.
pub const DEFAULT_HEALTH_WINDOW: i64 = 50;

/// Largest window a caller may request.
pub const MAX_HEALTH_WINDOW: i64 = 500;

/// Failure or warning count that escalates regardless of window size.
pub const ESCALATION_FLOOR: usize = 3;

/// Summary of a tool's recent reading quality. Higher is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthLevel {
    Low,
    Med,
    High,
}

/// Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthSnapshot {
    pub level: HealthLevel,
    pub warning_count: usize,
    pub failure_count: usize,
    /// Number of readings actually in the window (may be below the requested size).
    pub window_size: usize,
}

/// Aggregate a window of readings into a health snapshot.
///
/// The caller supplies at most `window` readings, most recent first; order
/// does not affect the result.
pub fn aggregate_health(
    readings: &[SensorValues],
    thresholds: &ClassifierThresholds,
) -> HealthSnapshot {
    let mut warning_count = 0;
    let mut failure_count = 0;

    for reading in readings {
        match classify(*reading, thresholds).severity {
            Severity::Failure => failure_count += 1,
            Severity::Warning => warning_count += 1,
            Severity::Normal => {}
        }
    }

    HealthSnapshot {
        level: level_for(warning_count, failure_count, readings.len()),
        warning_count,
        failure_count,
        window_size: readings.len(),
    }
}

/// Pick the level for the given tallies over a window of `n` readings.
pub fn level_for(warning_count: usize, failure_count: usize, n: usize) -> HealthLevel {
    if n == 0 {
        return HealthLevel::Low;
    }

    // rate >= 1/10  <=>  count * 10 >= n
    // rate >= 1/50  <=>  count * 50 >= n
    if failure_count * 10 >= n || failure_count >= ESCALATION_FLOOR {
        HealthLevel::High
    } else if failure_count * 50 >= n
        || warning_count * 10 >= n
        || warning_count >= ESCALATION_FLOOR
    {
        HealthLevel::Med
    } else {
        HealthLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORMAL: SensorValues = SensorValues {
        temperature: 70.0,
        pressure: 1.0,
        vibration: 0.3,
    };
    const WARNING: SensorValues = SensorValues {
        temperature: 90.0,
        pressure: 1.0,
        vibration: 0.3,
    };
    const FAILURE: SensorValues = SensorValues {
        temperature: 70.0,
        pressure: 1.0,
        vibration: 1.1,
    };

    fn window(normals: usize, warnings: usize, failures: usize) -> Vec<SensorValues> {
        let mut readings = Vec::with_capacity(normals + warnings + failures);
        readings.extend(std::iter::repeat(FAILURE).take(failures));
        readings.extend(std::iter::repeat(WARNING).take(warnings));
        readings.extend(std::iter::repeat(NORMAL).take(normals));
        readings
    }

    fn health(normals: usize, warnings: usize, failures: usize) -> HealthSnapshot {
        aggregate_health(
            &window(normals, warnings, failures),
            &ClassifierThresholds::default(),
        )
    }

    #[test]
    fn empty_window_is_low() {
        let h = health(0, 0, 0);
        assert_eq!(h.level, HealthLevel::Low);
        assert_eq!((h.warning_count, h.failure_count, h.window_size), (0, 0, 0));
    }

    #[test]
    fn all_normal_is_low() {
        assert_eq!(health(50, 0, 0).level, HealthLevel::Low);
    }

    #[test]
    fn three_failures_in_ten_is_high() {
        let h = health(7, 0, 3);
        assert_eq!(h.level, HealthLevel::High);
        assert_eq!(h.failure_count, 3);
    }

    #[test]
    fn failure_floor_fires_in_a_large_window() {
        // 3/500 = 0.6% is below every rate threshold.
        assert_eq!(health(497, 0, 3).level, HealthLevel::High);
    }

    #[test]
    fn one_failure_in_hundred_is_low() {
        let h = health(99, 0, 1);
        assert_eq!(h.level, HealthLevel::Low);
        assert_eq!(h.failure_count, 1);
    }

    #[test]
    fn two_failures_in_hundred_is_med() {
        assert_eq!(health(98, 0, 2).level, HealthLevel::Med);
    }

    #[test]
    fn one_failure_in_fifty_hits_two_percent_exactly() {
        assert_eq!(health(49, 0, 1).level, HealthLevel::Med);
    }

    #[test]
    fn one_failure_in_ten_hits_ten_percent_exactly() {
        assert_eq!(health(9, 0, 1).level, HealthLevel::High);
    }

    #[test]
    fn single_failure_in_small_window_is_high() {
        // 1/4 = 25% failure rate.
        assert_eq!(health(3, 0, 1).level, HealthLevel::High);
    }

    #[test]
    fn warning_rate_escalates_to_med() {
        // 2/20 = 10%.
        let h = health(18, 2, 0);
        assert_eq!(h.level, HealthLevel::Med);
        assert_eq!(h.warning_count, 2);
    }

    #[test]
    fn warning_floor_escalates_to_med() {
        // 3/100 = 3% is below the warning rate threshold.
        assert_eq!(health(97, 3, 0).level, HealthLevel::Med);
    }

    #[test]
    fn warnings_alone_never_reach_high() {
        assert_eq!(health(0, 50, 0).level, HealthLevel::Med);
    }

    #[test]
    fn failures_are_not_counted_as_warnings() {
        let h = health(5, 3, 1);
        assert_eq!(h.warning_count, 3);
        assert_eq!(h.failure_count, 1);
        assert_eq!(h.window_size, 9);
        // 1/9 failure rate exceeds 10%.
        assert_eq!(h.level, HealthLevel::High);
    }

    #[test]
    fn high_takes_precedence_over_med() {
        assert_eq!(health(0, 10, 3).level, HealthLevel::High);
    }

    #[test]
    fn order_does_not_matter() {
        let mut readings = window(20, 2, 1);
        let forward = aggregate_health(&readings, &ClassifierThresholds::default());
        readings.reverse();
        let backward = aggregate_health(&readings, &ClassifierThresholds::default());
        assert_eq!(forward, backward);
    }

    #[test]
    fn level_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&HealthLevel::Med).unwrap(), "\"MED\"");
    }
}
