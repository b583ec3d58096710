//! Repository for the `equipment` table.

use fabmon_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::{CreateEquipment, Equipment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, tool_type, location, status, last_seen_at, created_at";

/// Provides registration and lookup for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert a new piece of equipment, returning the created row.
    ///
    /// A duplicate name fails with a unique violation on
    /// [`UQ_EQUIPMENT_NAME`](crate::models::equipment::UQ_EQUIPMENT_NAME)
    /// and writes nothing.
    pub async fn create(pool: &PgPool, input: &CreateEquipment) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment (name, tool_type, location)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(&input.name)
            .bind(&input.tool_type)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find equipment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all equipment in registration order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment ORDER BY id ASC");
        sqlx::query_as::<_, Equipment>(&query).fetch_all(pool).await
    }
}
