//! Handlers for the `/equipment` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fabmon_core::equipment::validate_registration;
use fabmon_core::error::CoreError;
use fabmon_core::types::DbId;
use fabmon_db::is_unique_violation;
use fabmon_db::models::equipment::{CreateEquipment, Equipment, UQ_EQUIPMENT_NAME};
use fabmon_db::repositories::EquipmentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/equipment
///
/// Registers a tool. A taken name is rejected with 409 and nothing is
/// written.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    validate_registration(&input.name, &input.tool_type, &input.location)?;

    let equipment = match EquipmentRepo::create(&state.pool, &input).await {
        Ok(equipment) => equipment,
        Err(err) if is_unique_violation(&err, UQ_EQUIPMENT_NAME) => {
            tracing::info!(name = %input.name, "Equipment name already registered");
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Equipment name '{}' already exists",
                input.name
            ))));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(equipment_id = equipment.id, name = %equipment.name, "Equipment registered");

    let stale = state.monitoring().stale_after_secs;
    Ok((
        StatusCode::CREATED,
        Json(equipment.with_resolved_status(state.now(), stale)),
    ))
}

/// GET /api/v1/equipment
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Equipment>>> {
    let now = state.now();
    let stale = state.monitoring().stale_after_secs;
    let equipment = EquipmentRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|e| e.with_resolved_status(now, stale))
        .collect();
    Ok(Json(equipment))
}

/// GET /api/v1/equipment/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Equipment>> {
    let equipment = EquipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::equipment_not_found(id))?;
    Ok(Json(equipment.with_resolved_status(
        state.now(),
        state.monitoring().stale_after_secs,
    )))
}
