//! Atomic ingestion of one sensor reading.

use fabmon_core::classification::ClassifierThresholds;
use fabmon_core::ingest::plan_ingest;
use fabmon_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::alert::Alert;
use crate::models::reading::{CreateSensorReading, IngestedReading, SensorReading};

/// Writes a reading, its alert, and the owning equipment's last-seen update.
pub struct IngestRepo;

impl IngestRepo {
    /// Ingest one reading.
    ///
    /// In a single transaction:
    ///
    /// 1. Lock the equipment row (`FOR UPDATE`), serializing ingests for the
    ///    same tool. Returns `None` if the equipment does not exist.
    /// 2. Insert the reading.
    /// 3. Classify it.
    /// 4. Insert the alert, linked to the reading.
    /// 5. Set `last_seen_at` and `status` on the equipment.
    ///
    /// Any error drops the transaction before commit, so either every row
    /// is written or none is.
    pub async fn ingest(
        pool: &PgPool,
        input: &CreateSensorReading,
        thresholds: &ClassifierThresholds,
        now: Timestamp,
    ) -> Result<Option<IngestedReading>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId, Option<Timestamp>)> =
            sqlx::query_as("SELECT id, last_seen_at FROM equipment WHERE id = $1 FOR UPDATE")
                .bind(input.equipment_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((equipment_id, last_seen_at)) = locked else {
            tracing::debug!(equipment_id = input.equipment_id, "Ingest for unknown equipment");
            return Ok(None);
        };

        let plan = plan_ingest(input.values(), last_seen_at, now, thresholds);

        let reading = sqlx::query_as::<_, SensorReading>(
            "INSERT INTO sensor_readings (equipment_id, temperature, pressure, vibration, timestamp)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, equipment_id, temperature, pressure, vibration, timestamp",
        )
        .bind(equipment_id)
        .bind(input.temperature)
        .bind(input.pressure)
        .bind(input.vibration)
        .bind(plan.recorded_at)
        .fetch_one(&mut *tx)
        .await?;

        let alert = sqlx::query_as::<_, Alert>(
            "INSERT INTO alerts (equipment_id, reading_id, severity, reason, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, equipment_id, reading_id, severity, reason, created_at",
        )
        .bind(equipment_id)
        .bind(reading.id)
        .bind(plan.classification.severity.as_str())
        .bind(&plan.classification.reason)
        .bind(plan.recorded_at)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE equipment SET last_seen_at = $2, status = $3 WHERE id = $1")
            .bind(equipment_id)
            .bind(plan.recorded_at)
            .bind(plan.status.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(IngestedReading { reading, alert }))
    }
}
