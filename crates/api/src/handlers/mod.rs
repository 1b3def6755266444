//! Request handlers for roster entities.
//!
//! Each submodule provides async handler functions (create, list_all,
//! get_by_id, update, delete) for a single entity type. Handlers delegate
//! to the corresponding repository in `grimoire_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod character;
pub mod magic_type;
pub mod race;
