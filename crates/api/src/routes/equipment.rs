//! Route definitions for the `/equipment` resource and its sub-resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{alert, equipment, equipment_health, reading};
use crate::state::AppState;

/// Routes mounted at `/equipment`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// GET    /{id}/readings    -> list_by_equipment
/// GET    /{id}/alerts      -> list_by_equipment
/// GET    /{id}/health      -> get_health
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(equipment::list).post(equipment::create))
        .route("/{id}", get(equipment::get_by_id))
        .route("/{id}/readings", get(reading::list_by_equipment))
        .route("/{id}/alerts", get(alert::list_by_equipment))
        .route("/{id}/health", get(equipment_health::get_health))
}
