//! Fleet scan backing the dashboard summary.

use std::collections::HashMap;

use fabmon_core::classification::SensorValues;
use fabmon_core::dashboard::{summarize, DashboardSummary, FleetMember, SummaryParams};
use fabmon_core::types::{DbId, Timestamp};
use sqlx::PgPool;

/// Reads every tool's last-seen time and recent window in one snapshot.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Build the fleet summary.
    ///
    /// Equipment and readings are read in one `REPEATABLE READ` read-only
    /// transaction so the counts come from a single consistent snapshot,
    /// even while ingestion continues.
    pub async fn summary(
        pool: &PgPool,
        params: SummaryParams<'_>,
    ) -> Result<DashboardSummary, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let equipment: Vec<(DbId, Option<Timestamp>)> =
            sqlx::query_as("SELECT id, last_seen_at FROM equipment ORDER BY id ASC")
                .fetch_all(&mut *tx)
                .await?;

        // One index range scan per tool on (equipment_id, timestamp DESC, id DESC).
        let rows: Vec<(DbId, f64, f64, f64)> = sqlx::query_as(
            "SELECT e.id, r.temperature, r.pressure, r.vibration
             FROM equipment e
             CROSS JOIN LATERAL (
                 SELECT sr.temperature, sr.pressure, sr.vibration
                 FROM sensor_readings sr
                 WHERE sr.equipment_id = e.id
                 ORDER BY sr.timestamp DESC, sr.id DESC
                 LIMIT $1
             ) r",
        )
        .bind(params.window)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut windows: HashMap<DbId, Vec<SensorValues>> = HashMap::new();
        for (equipment_id, temperature, pressure, vibration) in rows {
            windows.entry(equipment_id).or_default().push(SensorValues {
                temperature,
                pressure,
                vibration,
            });
        }

        let members = equipment.iter().map(|(id, last_seen_at)| FleetMember {
            last_seen_at: *last_seen_at,
            readings: windows.get(id).map(Vec::as_slice).unwrap_or(&[]),
        });

        Ok(summarize(members, params))
    }
}
