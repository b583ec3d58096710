//! Repository for the `sensor_readings` table.
//!
//! Recency order is `timestamp DESC, id DESC` everywhere so that readings
//! sharing a timestamp still produce a deterministic window.

use fabmon_core::classification::SensorValues;
use fabmon_core::types::DbId;
use sqlx::PgPool;

use crate::models::reading::SensorReading;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, equipment_id, temperature, pressure, vibration, timestamp";

/// Provides read access to sensor readings. Writes go through
/// [`IngestRepo`](crate::repositories::IngestRepo).
pub struct ReadingRepo;

impl ReadingRepo {
    /// The most recent `limit` readings for a tool, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        equipment_id: DbId,
        limit: i64,
    ) -> Result<Vec<SensorReading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensor_readings
             WHERE equipment_id = $1
             ORDER BY timestamp DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(equipment_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The measured values of a tool's most recent `window` readings.
    ///
    /// Returns `None` if the equipment does not exist. The existence check
    /// and the window read share one read-only transaction.
    pub async fn health_window(
        pool: &PgPool,
        equipment_id: DbId,
        window: i64,
    ) -> Result<Option<Vec<SensorValues>>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let exists: Option<(DbId,)> = sqlx::query_as("SELECT id FROM equipment WHERE id = $1")
            .bind(equipment_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let rows: Vec<(f64, f64, f64)> = sqlx::query_as(
            "SELECT temperature, pressure, vibration FROM sensor_readings
             WHERE equipment_id = $1
             ORDER BY timestamp DESC, id DESC
             LIMIT $2",
        )
        .bind(equipment_id)
        .bind(window)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(
            rows.into_iter()
                .map(|(temperature, pressure, vibration)| SensorValues {
                    temperature,
                    pressure,
                    vibration,
                })
                .collect(),
        ))
    }
}
