//! Equipment entity model and DTOs.

use fabmon_core::status::resolve_status;
use fabmon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Name of the unique constraint on `equipment.name`.
pub const UQ_EQUIPMENT_NAME: &str = "uq_equipment_name";

/// A row from the `equipment` table.
///
/// The stored `status` reflects the last write only; use
/// [`Equipment::with_resolved_status`] before returning it to a caller.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub name: String,
    pub tool_type: String,
    pub location: String,
    pub status: String,
    pub last_seen_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Equipment {
    /// Replace the stored status with one recomputed from `last_seen_at`.
    pub fn with_resolved_status(mut self, now: Timestamp, stale_after_secs: i64) -> Self {
        self.status = resolve_status(self.last_seen_at, now, stale_after_secs)
            .as_str()
            .to_string();
        self
    }
}

/// DTO for registering new equipment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipment {
    pub name: String,
    pub tool_type: String,
    pub location: String,
}
