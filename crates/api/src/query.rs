//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for list endpoints. Clamped via
/// [`fabmon_core::pagination::clamp_limit`].
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// `?limit=&severity=` for per-equipment alert listings.
#[derive(Debug, Deserialize)]
pub struct AlertListParams {
    pub limit: Option<i64>,
    /// Exact, case-sensitive severity (`NORMAL`, `WARNING`, `FAILURE`).
    pub severity: Option<String>,
}

/// `?window=` for health and dashboard endpoints.
#[derive(Debug, Deserialize)]
pub struct WindowParams {
    pub window: Option<i64>,
}
