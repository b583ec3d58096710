use crate::types::DbId;

/// Domain error kinds surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced equipment id does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or out-of-range input, rejected before any write.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique field (the equipment name) is already taken.
    #[error("Conflict: {0}")]
    Conflict(String),
}
