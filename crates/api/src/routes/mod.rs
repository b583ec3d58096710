pub mod alerts;
pub mod dashboard;
pub mod equipment;
pub mod health;
pub mod readings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /equipment                                     list, register
/// /equipment/{id}                                get
/// /equipment/{id}/readings                       recent readings (?limit)
/// /equipment/{id}/alerts                         recent alerts (?limit, ?severity)
/// /equipment/{id}/health                         health snapshot (?window)
///
/// /readings                                      ingest (POST)
///
/// /alerts/failure                                recent FAILURE alerts (?limit)
///
/// /dashboard/summary                             fleet summary (?window)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/equipment", equipment::router())
        .nest("/readings", readings::router())
        .nest("/alerts", alerts::router())
        .nest("/dashboard", dashboard::router())
}
