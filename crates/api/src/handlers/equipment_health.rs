use axum::extract::{Path, Query, State};
use axum::Json;
use fabmon_core::health::{aggregate_health, HealthLevel, MAX_HEALTH_WINDOW};
use fabmon_core::pagination::clamp_limit;
use fabmon_core::types::DbId;
use fabmon_db::repositories::ReadingRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::WindowParams;
use crate::state::AppState;

/// Health snapshot for one tool.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub equipment_id: DbId,
    pub level: HealthLevel,
    /// Requested window after clamping.
    pub window: i64,
    /// Readings actually in the window.
    pub window_size: usize,
    pub warning_count: usize,
    pub failure_count: usize,
}

/// GET /api/v1/equipment/{id}/health
pub async fn get_health(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<HealthResponse>> {
    let monitoring = state.monitoring();
    let window = clamp_limit(params.window, monitoring.health_window, MAX_HEALTH_WINDOW);

    let readings = ReadingRepo::health_window(&state.pool, equipment_id, window)
        .await?
        .ok_or(AppError::equipment_not_found(equipment_id))?;
    let snapshot = aggregate_health(&readings, &monitoring.thresholds);

    Ok(Json(HealthResponse {
        equipment_id,
        level: snapshot.level,
        window,
        window_size: snapshot.window_size,
        warning_count: snapshot.warning_count,
        failure_count: snapshot.failure_count,
    }))
}
