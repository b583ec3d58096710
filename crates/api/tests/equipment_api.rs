//! HTTP-level integration tests for equipment registration and lookup.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

fn etch(name: &str) -> serde_json::Value {
    serde_json::json!({"name": name, "tool_type": "Dry Etch", "location": "Fab A - Bay 1"})
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_equipment_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/equipment", etch("ETCH-01")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "ETCH-01");
    assert_eq!(json["tool_type"], "Dry Etch");
    assert_eq!(json["location"], "Fab A - Bay 1");
    assert_eq!(json["status"], "IDLE");
    assert!(json["last_seen_at"].is_null());
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_name_returns_409_and_keeps_one_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/equipment", etch("CMP-02")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let second = post_json(app, "/api/v1/equipment", etch("CMP-02")).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("already exists"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE name = 'CMP-02'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/equipment", etch("   ")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/equipment",
        serde_json::json!({"name": "LITHO-03", "tool_type": "Scanner"}),
    )
    .await;

    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_equipment_by_id(pool: PgPool) {
    let id = common::register(common::build_test_app(pool.clone()), "DEP-04").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/equipment/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "DEP-04");
    assert_eq!(json["status"], "IDLE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_equipment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/equipment/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_equipment_in_registration_order(pool: PgPool) {
    for name in ["ETCH-01", "CMP-02", "LITHO-03"] {
        common::register(common::build_test_app(pool.clone()), name).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/equipment").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["ETCH-01", "CMP-02", "LITHO-03"]);
}
