//! Operational status derived from last-seen recency.
//!
//! Status is never authoritative in storage; it is recomputed from
//! `last_seen_at` whenever equipment is read.

use serde::{Deserialize, Serialize};

use chrono::Duration;

use crate::types::Timestamp;

/// Equipment that has not reported for longer than this is DOWN.
pub const DEFAULT_STALE_AFTER_SECS: i64 = 30;

pub const STATUS_RUN: &str = "RUN";
pub const STATUS_IDLE: &str = "IDLE";
pub const STATUS_DOWN: &str = "DOWN";

/// Operational state of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentStatus {
    /// Reported within the staleness window.
    Run,
    /// Never reported.
    Idle,
    /// Last report is older than the staleness window.
    Down,
}

impl EquipmentStatus {
    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Run => STATUS_RUN,
            Self::Idle => STATUS_IDLE,
            Self::Down => STATUS_DOWN,
        }
    }
}

/// Resolve the status of a tool from when it last reported.
///
/// The full elapsed duration is compared, so 30.5 s against a 30 s window
/// is DOWN. A `last_seen_at` in the future (clock skew) counts as fresh.
pub fn resolve_status(
    last_seen_at: Option<Timestamp>,
    now: Timestamp,
    stale_after_secs: i64,
) -> EquipmentStatus {
    match last_seen_at {
        None => EquipmentStatus::Idle,
        Some(seen) => {
            if now.signed_duration_since(seen) > Duration::seconds(stale_after_secs) {
                EquipmentStatus::Down
            } else {
                EquipmentStatus::Run
            }
        }
    }
}
