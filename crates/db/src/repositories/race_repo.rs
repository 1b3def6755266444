//! Repository for the `races` table.

use grimoire_core::types::DbId;
use sqlx::PgPool;

use crate::models::race::{CreateRace, Race, UpdateRace};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, race";

/// Provides CRUD operations for races.
pub struct RaceRepo;

impl RaceRepo {
    /// Insert a new race, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &CreateRace) -> Result<Race, sqlx::Error> {
        let query = format!("INSERT INTO races (race) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Race>(&query)
            .bind(&input.race)
            .fetch_one(pool)
            .await
    }

    /// Find a race by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Race>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM races WHERE id = $1");
        sqlx::query_as::<_, Race>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every race, in storage-native order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Race>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM races");
        sqlx::query_as::<_, Race>(&query).fetch_all(pool).await
    }

    /// Update a race. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRace,
    ) -> Result<Option<Race>, sqlx::Error> {
        let query = format!(
            "UPDATE races SET race = COALESCE($2, race)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Race>(&query)
            .bind(id)
            .bind(&input.race)
            .fetch_optional(pool)
            .await
    }

    /// Delete a race by ID. Returns `true` if a row was removed.
    ///
    /// Characters referencing the race are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM races WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
