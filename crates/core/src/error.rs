use crate::types::DbId;

/// Errors the domain layer can raise; the API layer decides their HTTP
/// shape.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("no {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}
