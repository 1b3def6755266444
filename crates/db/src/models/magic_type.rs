//! MagicType entity model and DTOs.

use grimoire_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A magic type row from the `magic_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MagicType {
    pub id: DbId,
    /// e.g. Arcane, Dark, Light, Elemental.
    pub magic: String,
}

/// DTO for creating a new magic type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMagicType {
    #[validate(length(min = 1, message = "magic must not be empty"))]
    pub magic: String,
}

/// DTO for updating an existing magic type. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMagicType {
    #[validate(length(min = 1, message = "magic must not be empty"))]
    pub magic: Option<String>,
}
