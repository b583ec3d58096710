//! Alert model.

use fabmon_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `alerts` table.
///
/// `severity` is one of the strings in
/// [`fabmon_core::classification::VALID_SEVERITIES`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    pub equipment_id: DbId,
    pub reading_id: DbId,
    pub severity: String,
    pub reason: String,
    pub created_at: Timestamp,
}
