use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers borrow the pool per query; no session outlives a request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: grimoire_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
