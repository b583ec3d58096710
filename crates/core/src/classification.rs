//! Rule-based classification of a single sensor reading.
//!
//! A reading is mapped to a [`Severity`] plus a templated reason string.
//! Failure rules are evaluated before warning rules, and within each tier the
//! checks run temperature, then vibration, then pressure. The first match wins.
//!
//! Comparisons are strict (`>`), so a value exactly at a threshold does not
//! trip it. Any comparison against NaN is false, which means a reading made
//! of NaN values classifies as [`Severity::Normal`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DEFAULT_WARN_TEMP: f64 = 85.0;
pub const DEFAULT_FAIL_TEMP: f64 = 95.0;
pub const DEFAULT_WARN_VIBRATION: f64 = 0.7;
pub const DEFAULT_FAIL_VIBRATION: f64 = 0.9;
pub const DEFAULT_LOW_PRESSURE: f64 = 0.8;
pub const DEFAULT_HIGH_PRESSURE: f64 = 1.3;

pub const SEVERITY_NORMAL: &str = "NORMAL";
pub const SEVERITY_WARNING: &str = "WARNING";
pub const SEVERITY_FAILURE: &str = "FAILURE";

/// All valid severity strings, as stored in the `alerts.severity` column.
pub const VALID_SEVERITIES: &[&str] = &[SEVERITY_NORMAL, SEVERITY_WARNING, SEVERITY_FAILURE];

/// Reason attached to readings that trip no rule.
pub const REASON_NORMAL: &str = "within normal thresholds";

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Classification tier of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Normal,
    Warning,
    Failure,
}

impl Severity {
    /// Convert from the stored string value. Matching is case-sensitive.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            SEVERITY_NORMAL => Ok(Self::Normal),
            SEVERITY_WARNING => Ok(Self::Warning),
            SEVERITY_FAILURE => Ok(Self::Failure),
            _ => Err(CoreError::Validation(format!(
                "Invalid severity '{s}'. Must be one of: {}",
                VALID_SEVERITIES.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => SEVERITY_NORMAL,
            Self::Warning => SEVERITY_WARNING,
            Self::Failure => SEVERITY_FAILURE,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Classifier thresholds. Tunable per deployment; defaults match the
/// values every existing client expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    pub warn_temp: f64,
    pub fail_temp: f64,
    pub warn_vibration: f64,
    pub fail_vibration: f64,
    pub low_pressure: f64,
    pub high_pressure: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            warn_temp: DEFAULT_WARN_TEMP,
            fail_temp: DEFAULT_FAIL_TEMP,
            warn_vibration: DEFAULT_WARN_VIBRATION,
            fail_vibration: DEFAULT_FAIL_VIBRATION,
            low_pressure: DEFAULT_LOW_PRESSURE,
            high_pressure: DEFAULT_HIGH_PRESSURE,
        }
    }
}

impl ClassifierThresholds {
    /// Check that every threshold is finite and each pair is ordered.
    pub fn validate(&self) -> Result<(), CoreError> {
        let all = [
            ("warn_temp", self.warn_temp),
            ("fail_temp", self.fail_temp),
            ("warn_vibration", self.warn_vibration),
            ("fail_vibration", self.fail_vibration),
            ("low_pressure", self.low_pressure),
            ("high_pressure", self.high_pressure),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(CoreError::Validation(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        if self.warn_temp >= self.fail_temp {
            return Err(CoreError::Validation(format!(
                "warn_temp ({}) must be below fail_temp ({})",
                self.warn_temp, self.fail_temp
            )));
        }
        if self.warn_vibration >= self.fail_vibration {
            return Err(CoreError::Validation(format!(
                "warn_vibration ({}) must be below fail_vibration ({})",
                self.warn_vibration, self.fail_vibration
            )));
        }
        if self.low_pressure >= self.high_pressure {
            return Err(CoreError::Validation(format!(
                "low_pressure ({}) must be below high_pressure ({})",
                self.low_pressure, self.high_pressure
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// The three measured values of one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorValues {
    pub temperature: f64,
    pub pressure: f64,
    pub vibration: f64,
}

/// Outcome of classifying one reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub severity: Severity,
    pub reason: String,
}

impl Classification {
    fn new(severity: Severity, reason: String) -> Self {
        Self { severity, reason }
    }
}

/// Classify a reading against the given thresholds.
///
/// Thresholds are rendered with `{:?}` so whole numbers keep their decimal
/// point (`"temperature > 95.0"`), matching the stored reason strings.
pub fn classify(values: SensorValues, thresholds: &ClassifierThresholds) -> Classification {
    let SensorValues {
        temperature,
        pressure,
        vibration,
    } = values;
    let t = thresholds;

    // Failure tier.
    if temperature > t.fail_temp {
        return Classification::new(Severity::Failure, format!("temperature > {:?}", t.fail_temp));
    }
    if vibration > t.fail_vibration {
        return Classification::new(
            Severity::Failure,
            format!("vibration > {:?}", t.fail_vibration),
        );
    }
    if pressure < t.low_pressure || pressure > t.high_pressure {
        return Classification::new(
            Severity::Failure,
            format!(
                "pressure out of range [{:?}, {:?}]",
                t.low_pressure, t.high_pressure
            ),
        );
    }

    // Warning tier.
    if temperature > t.warn_temp {
        return Classification::new(Severity::Warning, format!("temperature > {:?}", t.warn_temp));
    }
    if vibration > t.warn_vibration {
        return Classification::new(
            Severity::Warning,
            format!("vibration > {:?}", t.warn_vibration),
        );
    }

    Classification::new(Severity::Normal, REASON_NORMAL.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
