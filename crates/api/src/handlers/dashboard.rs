use axum::extract::{Query, State};
use axum::Json;
use fabmon_core::dashboard::{DashboardSummary, SummaryParams};
use fabmon_core::health::MAX_HEALTH_WINDOW;
use fabmon_core::pagination::clamp_limit;
use fabmon_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::query::WindowParams;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<DashboardSummary>> {
    let monitoring = state.monitoring();
    let window = clamp_limit(params.window, monitoring.health_window, MAX_HEALTH_WINDOW);

    let summary = DashboardRepo::summary(
        &state.pool,
        SummaryParams {
            window,
            now: state.now(),
            stale_after_secs: monitoring.stale_after_secs,
            thresholds: &monitoring.thresholds,
        },
    )
    .await?;

    tracing::debug!(total = summary.total, window, "Dashboard summary computed");
    Ok(Json(summary))
}
