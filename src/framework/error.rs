//! # Framework Errors
//!
//! Failures of the actor plumbing itself. Domain errors from entity hooks travel boxed
//! inside [`FrameworkError::EntityError`]; client wrappers downcast them back.

/// Errors raised while a request travels to a resource actor and back.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's request queue is closed: its task has exited.
    #[error("resource store is not running")]
    ActorClosed,

    /// The actor accepted the request but never answered it.
    #[error("resource store dropped the request without answering")]
    ActorDropped,

    /// No record has this id. Carries the id's display form.
    #[error("no record with id {0}")]
    NotFound(String),

    /// Another record already holds this unique key.
    #[error("a record with key {0} already exists")]
    Conflict(String),

    /// An entity hook refused the request.
    #[error("{0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SessionToken;
    use uuid::Uuid;

    #[test]
    fn test_entity_errors_render_as_their_own_message() {
        let error = FrameworkError::EntityError("Please add a text field".into());
        assert_eq!(error.to_string(), "Please add a text field");
    }

    #[test]
    fn test_not_found_keeps_redacted_ids_redacted() {
        let token = SessionToken::from(Uuid::new_v4());
        let error = FrameworkError::NotFound(token.to_string());
        assert_eq!(error.to_string(), "no record with id <redacted>");
        assert!(!error.to_string().contains(&token.expose()));
    }
}
