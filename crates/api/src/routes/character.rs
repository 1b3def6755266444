//! Route definitions for the `/characters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes for the `/characters` resource.
///
/// axum matches `/characters` and `/characters/` as distinct routes, so the
/// collection endpoints are registered under both forms.
///
/// ```text
/// GET    /characters/        -> list_all
/// POST   /characters/        -> create
/// GET    /characters/{id}    -> get_by_id
/// PATCH  /characters/{id}    -> update
/// DELETE /characters/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/characters/",
            get(character::list_all).post(character::create),
        )
        .route(
            "/characters",
            get(character::list_all).post(character::create),
        )
        .route(
            "/characters/{id}",
            get(character::get_by_id)
                .patch(character::update)
                .delete(character::delete),
        )
}
