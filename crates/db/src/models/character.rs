//! Character entity model and DTOs.

use grimoire_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A character row from the `characters` table.
///
/// `race_id` and `magic_type_id` name rows in the `races` and `magic_types`
/// tables but are not constrained by the schema; deleting a referenced race
/// leaves the ids here dangling.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub age: Option<i64>,
    pub race_id: DbId,
    pub magic_type_id: DbId,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCharacter {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub age: Option<i64>,
    pub race_id: DbId,
    pub magic_type_id: DbId,
}

/// DTO for updating an existing character. All fields are optional;
/// absent fields keep their current value.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCharacter {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub age: Option<i64>,
    pub race_id: Option<DbId>,
    pub magic_type_id: Option<DbId>,
}
