//! Handlers for sensor readings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fabmon_core::classification::Severity;
use fabmon_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use fabmon_core::types::DbId;
use fabmon_db::models::reading::{CreateSensorReading, SensorReading};
use fabmon_db::repositories::{IngestRepo, ReadingRepo};

use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::state::AppState;

/// POST /api/v1/readings
///
/// Stores the reading, its alert, and the equipment's new last-seen time
/// atomically. Unknown equipment yields 404 with nothing written.
pub async fn ingest(
    State(state): State<AppState>,
    Json(input): Json<CreateSensorReading>,
) -> AppResult<(StatusCode, Json<SensorReading>)> {
    let ingested = IngestRepo::ingest(
        &state.pool,
        &input,
        &state.monitoring().thresholds,
        state.now(),
    )
    .await?
    .ok_or(AppError::equipment_not_found(input.equipment_id))?;

    let alert = &ingested.alert;
    if alert.severity == Severity::Failure.as_str() {
        tracing::warn!(
            equipment_id = alert.equipment_id,
            reading_id = alert.reading_id,
            reason = %alert.reason,
            "Failure reading"
        );
    }
    tracing::info!(
        equipment_id = ingested.reading.equipment_id,
        reading_id = ingested.reading.id,
        severity = %alert.severity,
        "Reading ingested"
    );

    Ok((StatusCode::CREATED, Json(ingested.reading)))
}

/// GET /api/v1/equipment/{id}/readings
///
/// Newest first. Unknown equipment has no readings, so the list is empty.
pub async fn list_by_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<SensorReading>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let readings = ReadingRepo::list_recent(&state.pool, equipment_id, limit).await?;
    Ok(Json(readings))
}
