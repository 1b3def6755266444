use crate::types::DbId;

/// Domain-level error taxonomy shared across crates.
///
/// Repositories signal absence through `Option`/`bool` return values; this
/// enum is how the layers above them name those conditions once they become
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
