//! Handlers for the `/races` resource.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use grimoire_core::error::CoreError;
use grimoire_core::types::DbId;
use grimoire_db::models::race::{CreateRace, Race, UpdateRace};
use grimoire_db::repositories::RaceRepo;

use crate::error::{AppError, AppResult};
use crate::response::DeleteConfirmation;
use crate::state::AppState;

/// POST /races/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRace>,
) -> AppResult<Json<Race>> {
    input.validate()?;
    let race = RaceRepo::create(&state.pool, &input).await?;
    Ok(Json(race))
}

/// GET /races/
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Race>>> {
    let races = RaceRepo::list_all(&state.pool).await?;
    Ok(Json(races))
}

/// GET /races/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Race>> {
    let race = RaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Race", id }))?;
    Ok(Json(race))
}

/// PATCH /races/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRace>,
) -> AppResult<Json<Race>> {
    input.validate()?;
    let race = RaceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Race", id }))?;
    Ok(Json(race))
}

/// DELETE /races/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteConfirmation>> {
    let deleted = RaceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            ok: true,
            message: format!("Race {id} deleted"),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Race", id }))
    }
}
