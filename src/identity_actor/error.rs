//! Error types for the Identity actor.

use thiserror::Error;

/// Errors that can occur during identity store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    /// Another record already holds this email.
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// The record is missing a required field.
    #[error("Invalid identity record: {0}")]
    InvalidRecord(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
