//! Race entity model and DTOs.

use grimoire_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A race row from the `races` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Race {
    pub id: DbId,
    /// e.g. Human, Elf, Dwarf.
    pub race: String,
}

/// DTO for creating a new race.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRace {
    #[validate(length(min = 1, message = "race must not be empty"))]
    pub race: String,
}

/// DTO for updating an existing race. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRace {
    #[validate(length(min = 1, message = "race must not be empty"))]
    pub race: Option<String>,
}
