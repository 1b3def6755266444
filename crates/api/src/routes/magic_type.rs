//! Route definitions for the `/magictypes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::magic_type;
use crate::state::AppState;

/// Routes for the `/magictypes` resource.
///
/// axum matches `/magictypes` and `/magictypes/` as distinct routes, so the
/// collection endpoints are registered under both forms.
///
/// ```text
/// GET    /magictypes/        -> list_all
/// POST   /magictypes/        -> create
/// GET    /magictypes/{id}    -> get_by_id
/// PATCH  /magictypes/{id}    -> update
/// DELETE /magictypes/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/magictypes/",
            get(magic_type::list_all).post(magic_type::create),
        )
        .route(
            "/magictypes",
            get(magic_type::list_all).post(magic_type::create),
        )
        .route(
            "/magictypes/{id}",
            get(magic_type::get_by_id)
                .patch(magic_type::update)
                .delete(magic_type::delete),
        )
}
