//! Handlers for the `/characters` resource.
//!
//! `race_id` and `magic_type_id` in create/update payloads are persisted as
//! given; no existence check is made against the referenced tables.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use grimoire_core::error::CoreError;
use grimoire_core::types::DbId;
use grimoire_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use grimoire_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::response::DeleteConfirmation;
use crate::state::AppState;

/// POST /characters/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<Json<Character>> {
    input.validate()?;
    let character = CharacterRepo::create(&state.pool, &input).await?;
    Ok(Json(character))
}

/// GET /characters/
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list_all(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// PATCH /characters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    input.validate()?;
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteConfirmation>> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            ok: true,
            message: format!("Character {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
    }
}
