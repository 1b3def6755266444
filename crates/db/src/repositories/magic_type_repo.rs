//! Repository for the `magic_types` table.

use grimoire_core::types::DbId;
use sqlx::PgPool;

use crate::models::magic_type::{CreateMagicType, MagicType, UpdateMagicType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, magic";

/// Provides CRUD operations for magic types.
pub struct MagicTypeRepo;

impl MagicTypeRepo {
    /// Insert a new magic type, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &CreateMagicType) -> Result<MagicType, sqlx::Error> {
        let query = format!("INSERT INTO magic_types (magic) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, MagicType>(&query)
            .bind(&input.magic)
            .fetch_one(pool)
            .await
    }

    /// Find a magic type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MagicType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM magic_types WHERE id = $1");
        sqlx::query_as::<_, MagicType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every magic type, in storage-native order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MagicType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM magic_types");
        sqlx::query_as::<_, MagicType>(&query).fetch_all(pool).await
    }

    /// Update a magic type. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMagicType,
    ) -> Result<Option<MagicType>, sqlx::Error> {
        let query = format!(
            "UPDATE magic_types SET magic = COALESCE($2, magic)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MagicType>(&query)
            .bind(id)
            .bind(&input.magic)
            .fetch_optional(pool)
            .await
    }

    /// Delete a magic type by ID. Returns `true` if a row was removed.
    ///
    /// Characters referencing the magic type are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM magic_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
