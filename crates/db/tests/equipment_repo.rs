//! Integration tests for equipment registration and lookup.

use fabmon_db::is_unique_violation;
use fabmon_db::models::equipment::{CreateEquipment, UQ_EQUIPMENT_NAME};
use fabmon_db::repositories::EquipmentRepo;
use sqlx::PgPool;

fn new_equipment(name: &str) -> CreateEquipment {
    CreateEquipment {
        name: name.to_string(),
        tool_type: "Dry Etch".to_string(),
        location: "Fab A - Bay 1".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_health_check(pool: PgPool) {
    fabmon_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_equipment(pool: PgPool) {
    let created = EquipmentRepo::create(&pool, &new_equipment("ETCH-01"))
        .await
        .unwrap();
    assert_eq!(created.name, "ETCH-01");
    assert_eq!(created.status, "IDLE");
    assert!(created.last_seen_at.is_none());

    let found = EquipmentRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("equipment should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.tool_type, "Dry Etch");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_equipment_returns_none(pool: PgPool) {
    assert!(EquipmentRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_name_is_rejected_atomically(pool: PgPool) {
    EquipmentRepo::create(&pool, &new_equipment("CMP-03"))
        .await
        .unwrap();

    let err = EquipmentRepo::create(&pool, &new_equipment("CMP-03"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, UQ_EQUIPMENT_NAME));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM equipment WHERE name = $1")
        .bind("CMP-03")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_in_registration_order(pool: PgPool) {
    for name in ["LIT-01", "CVD-02", "ETCH-01"] {
        EquipmentRepo::create(&pool, &new_equipment(name))
            .await
            .unwrap();
    }
    let names: Vec<String> = EquipmentRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["LIT-01", "CVD-02", "ETCH-01"]);
}
