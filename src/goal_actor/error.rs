//! Error types for the Goal actor and the goal API.

use thiserror::Error;

/// Errors that can occur during goal operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GoalError {
    /// The goal data provided is invalid.
    #[error("{0}")]
    Validation(String),

    /// No goal with this id exists.
    #[error("Goal not found")]
    NotFound(String),

    /// Missing/unknown token, or the goal belongs to someone else.
    #[error("{0}")]
    Unauthorized(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl GoalError {
    /// The HTTP status an HTTP layer would answer with.
    pub fn status_hint(&self) -> u16 {
        match self {
            GoalError::Validation(_) => 400,
            GoalError::Unauthorized(_) => 401,
            GoalError::NotFound(_) => 404,
            GoalError::ActorCommunicationError(_) => 500,
        }
    }
}
