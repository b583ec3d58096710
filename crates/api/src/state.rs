use std::sync::Arc;

use fabmon_core::clock::Clock;
use fabmon_core::types::Timestamp;

use crate::config::{MonitoringConfig, ServerConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fabmon_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of "now" for status resolution and ingestion timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn monitoring(&self) -> &MonitoringConfig {
        &self.config.monitoring
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
