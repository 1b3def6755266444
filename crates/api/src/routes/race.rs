//! Route definitions for the `/races` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::race;
use crate::state::AppState;

/// Routes for the `/races` resource.
///
/// axum matches `/races` and `/races/` as distinct routes, so the
/// collection endpoints are registered under both forms.
///
/// ```text
/// GET    /races/        -> list_all
/// POST   /races/        -> create
/// GET    /races/{id}    -> get_by_id
/// PATCH  /races/{id}    -> update
/// DELETE /races/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/races/", get(race::list_all).post(race::create))
        .route("/races", get(race::list_all).post(race::create))
        .route(
            "/races/{id}",
            get(race::get_by_id).patch(race::update).delete(race::delete),
        )
}
