//! Route definitions.
//!
//! Each entity module registers the same five-route shape at its public
//! path prefix; [`api_routes`] merges them into one tree.

pub mod character;
pub mod health;
pub mod magic_type;
pub mod race;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// ```text
/// /characters/           GET list_all, POST create
/// /characters/{id}       GET, PATCH, DELETE
/// /races/                GET list_all, POST create
/// /races/{id}            GET, PATCH, DELETE
/// /magictypes/           GET list_all, POST create
/// /magictypes/{id}       GET, PATCH, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(character::router())
        .merge(race::router())
        .merge(magic_type::router())
}
