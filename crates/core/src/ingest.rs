//! Pure part of reading ingestion.
//!
//! The storage layer locks the equipment row, asks for an [`IngestPlan`],
//! and then writes the reading, the alert, and the equipment update in one
//! transaction. Keeping the decisions here lets them be tested without a
//! database.

use crate::classification::{classify, Classification, ClassifierThresholds, SensorValues};
use crate::status::EquipmentStatus;
use crate::types::Timestamp;

/// Everything the storage layer needs to persist one ingested reading.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestPlan {
    /// Timestamp for the reading, the alert, and the new `last_seen_at`.
    pub recorded_at: Timestamp,
    pub classification: Classification,
    /// Status to store on the equipment row.
    pub status: EquipmentStatus,
}

/// Decide how to record a reading for equipment last seen at `last_seen_at`.
///
/// The recorded timestamp never goes backwards for a tool: if the clock
/// reads earlier than the previous report, the previous timestamp is reused.
pub fn plan_ingest(
    values: SensorValues,
    last_seen_at: Option<Timestamp>,
    now: Timestamp,
    thresholds: &ClassifierThresholds,
) -> IngestPlan {
    let recorded_at = match last_seen_at {
        Some(previous) if previous > now => previous,
        _ => now,
    };

    IngestPlan {
        recorded_at,
        classification: classify(values, thresholds),
        status: EquipmentStatus::Run,
    }
}
