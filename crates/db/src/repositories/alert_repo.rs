//! Repository for the `alerts` table.

use fabmon_core::classification::Severity;
use fabmon_core::types::DbId;
use sqlx::PgPool;

use crate::models::alert::Alert;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, equipment_id, reading_id, severity, reason, created_at";

/// Provides read access to alerts. Alerts are only ever written by
/// [`IngestRepo`](crate::repositories::IngestRepo).
pub struct AlertRepo;

impl AlertRepo {
    /// The most recent `limit` alerts for a tool, newest first, optionally
    /// restricted to one severity.
    pub async fn list_for_equipment(
        pool: &PgPool,
        equipment_id: DbId,
        severity: Option<Severity>,
        limit: i64,
    ) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts
             WHERE equipment_id = $1 AND ($2::TEXT IS NULL OR severity = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(equipment_id)
            .bind(severity.map(|s| s.as_str()))
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The most recent `limit` alerts of exactly `severity` across all
    /// equipment, newest first.
    pub async fn list_by_severity(
        pool: &PgPool,
        severity: Severity,
        limit: i64,
    ) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts
             WHERE severity = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(severity.as_str())
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
