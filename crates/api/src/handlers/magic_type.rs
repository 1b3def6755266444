//! Handlers for the `/magictypes` resource.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use grimoire_core::error::CoreError;
use grimoire_core::types::DbId;
use grimoire_db::models::magic_type::{CreateMagicType, MagicType, UpdateMagicType};
use grimoire_db::repositories::MagicTypeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DeleteConfirmation;
use crate::state::AppState;

/// POST /magictypes/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMagicType>,
) -> AppResult<Json<MagicType>> {
    input.validate()?;
    let magic_type = MagicTypeRepo::create(&state.pool, &input).await?;
    Ok(Json(magic_type))
}

/// GET /magictypes/
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<MagicType>>> {
    let magic_types = MagicTypeRepo::list_all(&state.pool).await?;
    Ok(Json(magic_types))
}

/// GET /magictypes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MagicType>> {
    let magic_type = MagicTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MagicType",
            id,
        }))?;
    Ok(Json(magic_type))
}

/// PATCH /magictypes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMagicType>,
) -> AppResult<Json<MagicType>> {
    input.validate()?;
    let magic_type = MagicTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MagicType",
            id,
        }))?;
    Ok(Json(magic_type))
}

/// DELETE /magictypes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteConfirmation>> {
    let deleted = MagicTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            ok: true,
            message: format!("MagicType {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MagicType",
            id,
        }))
    }
}
