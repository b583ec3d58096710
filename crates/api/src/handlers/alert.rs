//! Handlers for alerts.

use axum::extract::{Path, Query, State};
use axum::Json;
use fabmon_core::classification::Severity;
use fabmon_core::pagination::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use fabmon_core::types::DbId;
use fabmon_db::models::alert::Alert;
use fabmon_db::repositories::AlertRepo;

use crate::error::AppResult;
use crate::query::{AlertListParams, LimitParams};
use crate::state::AppState;

/// GET /api/v1/equipment/{id}/alerts
///
/// `severity` must match exactly (`FAILURE`, not `failure`); anything else
/// is a 400.
pub async fn list_by_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Query(params): Query<AlertListParams>,
) -> AppResult<Json<Vec<Alert>>> {
    let severity = params
        .severity
        .as_deref()
        .map(Severity::from_str_value)
        .transpose()?;
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

    let alerts = AlertRepo::list_for_equipment(&state.pool, equipment_id, severity, limit).await?;
    Ok(Json(alerts))
}

/// GET /api/v1/alerts/failure
pub async fn list_failures(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Alert>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let alerts = AlertRepo::list_by_severity(&state.pool, Severity::Failure, limit).await?;
    Ok(Json(alerts))
}
