//! Service error taxonomy
//!
//! Shared by both stores. Every variant maps to exactly one HTTP status at
//! the route layer; no error is retried or recovered within a request.

use crate::application::ports::outbound::RepositoryError;
use crate::domain::value_objects::ZoneId;

/// Domain failures surfaced by the zone and creature services
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Referenced id does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Zone deletion blocked because creatures still reference it
    #[error(
        "Cannot delete zone '{name}' (ID: {id}) because it contains {count} creatures. \
         Remove all creatures first."
    )]
    ZoneNotEmpty {
        name: String,
        id: ZoneId,
        count: usize,
    },

    /// Creature deletion blocked by critical health
    #[error("Cannot delete a creature in critical health")]
    CriticalHealth,

    /// Malformed input shape, rejected before any store call
    #[error("{0}")]
    Validation(String),

    /// Storage failure, propagated unchanged
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
