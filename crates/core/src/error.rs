use crate::types::DbId;

/// Domain-level error taxonomy shared by all layers.
///
/// Only `NotFound`, `Validation`, `Unauthorized`, and `Forbidden` are ever
/// surfaced to API callers; delivery-channel failures are handled where
/// they occur and never become a `CoreError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
