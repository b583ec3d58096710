//! Fleet-wide dashboard summary.
//!
//! For each tool the caller supplies its `last_seen_at` and its most recent
//! window of readings; this module resolves status and health per tool and
//! accumulates the counts. Nothing is cached, so a summary costs
//! O(equipment x window) classifications. That is fine for modest fleets;
//! larger ones would need precomputed rolling counters.

use serde::Serialize;

use crate::classification::{ClassifierThresholds, SensorValues};
use crate::health::{aggregate_health, HealthLevel};
use crate::status::{resolve_status, EquipmentStatus};
use crate::types::Timestamp;

/// Counts of equipment by operational status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub run: usize,
    pub idle: usize,
    pub down: usize,
}

/// Counts of equipment by health level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HealthCounts {
    pub high: usize,
    pub med: usize,
    pub low: usize,
}

/// Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    /// Window size used for every tool's health.
    pub window: i64,
    pub status: StatusCounts,
    pub health: HealthCounts,
    pub generated_at: Timestamp,
}

impl DashboardSummary {
    /// An empty summary for the given window and instant.
    pub fn empty(window: i64, generated_at: Timestamp) -> Self {
        Self {
            total: 0,
            window,
            status: StatusCounts::default(),
            health: HealthCounts::default(),
            generated_at,
        }
    }

    /// Count one tool.
    pub fn record(&mut self, status: EquipmentStatus, level: HealthLevel) {
        self.total += 1;
        match status {
            EquipmentStatus::Run => self.status.run += 1,
            EquipmentStatus::Idle => self.status.idle += 1,
            EquipmentStatus::Down => self.status.down += 1,
        }
        match level {
            HealthLevel::High => self.health.high += 1,
            HealthLevel::Med => self.health.med += 1,
            HealthLevel::Low => self.health.low += 1,
        }
    }
}

/// One tool's inputs to the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct FleetMember<'a> {
    pub last_seen_at: Option<Timestamp>,
    /// Most recent readings, newest first, at most `window` of them.
    pub readings: &'a [SensorValues],
}

/// Parameters shared by every tool in one summary.
#[derive(Debug, Clone, Copy)]
pub struct SummaryParams<'a> {
    pub window: i64,
    pub now: Timestamp,
    pub stale_after_secs: i64,
    pub thresholds: &'a ClassifierThresholds,
}

/// Build the fleet summary.
pub fn summarize<'a, I>(members: I, params: SummaryParams<'_>) -> DashboardSummary
where
    I: IntoIterator<Item = FleetMember<'a>>,
{
    let mut summary = DashboardSummary::empty(params.window, params.now);
    for member in members {
        let status = resolve_status(member.last_seen_at, params.now, params.stale_after_secs);
        let health = aggregate_health(member.readings, params.thresholds);
        summary.record(status, health.level);
    }
    summary
}
