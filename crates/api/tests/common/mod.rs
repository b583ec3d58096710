#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fabmon_api::config::{LogFormat, MonitoringConfig, ServerConfig};
use fabmon_api::router::build_app_router;
use fabmon_api::state::AppState;
use fabmon_core::clock::{FixedClock, SystemClock};
use fabmon_core::types::Timestamp;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and default monitoring policy.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
        monitoring: MonitoringConfig::default(),
    }
}

/// Build the full application router on the wall clock.
///
/// Goes through `build_app_router` so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        clock: Arc::new(SystemClock),
    };
    build_app_router(state, &config)
}

/// Build the router on a caller-controlled clock.
pub fn build_test_app_with_clock(pool: PgPool, clock: Arc<FixedClock>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        clock,
    };
    build_app_router(state, &config)
}

/// A fixed starting instant for clock-driven tests.
pub fn start_instant() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Register a tool and return its id.
pub async fn register(app: Router, name: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/equipment",
        serde_json::json!({"name": name, "tool_type": "Dry Etch", "location": "Fab A - Bay 1"}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Ingest one reading and return the response.
pub async fn ingest(
    app: Router,
    equipment_id: i64,
    temperature: f64,
    pressure: f64,
    vibration: f64,
) -> Response<Body> {
    post_json(
        app,
        "/api/v1/readings",
        serde_json::json!({
            "equipment_id": equipment_id,
            "temperature": temperature,
            "pressure": pressure,
            "vibration": vibration,
        }),
    )
    .await
}
