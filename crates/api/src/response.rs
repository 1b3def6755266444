//! Shared response types for API handlers.
//!
//! Entity reads are serialized field-for-field from the row structs in
//! `grimoire_db::models`; only the delete confirmation has its own shape.

use serde::Serialize;

/// Confirmation payload returned by DELETE endpoints.
///
/// The message names the entity kind and id, e.g. `"Race 7 deleted"`.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub ok: bool,
    pub message: String,
}
