//! Repository for the `characters` table.

use grimoire_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, race_id, magic_type_id";

/// Provides CRUD operations for characters.
///
/// `race_id` and `magic_type_id` are written as given; no existence check is
/// made against the referenced tables.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, age, race_id, magic_type_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.race_id)
            .bind(input.magic_type_id)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every character, in storage-native order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Update a character. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. `age` can be
    /// changed but not cleared through this path; a `None` age means
    /// "leave as is".
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                race_id = COALESCE($4, race_id),
                magic_type_id = COALESCE($5, magic_type_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.race_id)
            .bind(input.magic_type_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a character by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
