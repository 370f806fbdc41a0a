//! Error types for the registration service.

use crate::model::ErrorBody;
use thiserror::Error;

/// Errors returned by [`RegistrationService`](super::RegistrationService).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistrationError {
    /// A required field is empty. Carries the field name.
    #[error("missing field: {0}")]
    Validation(String),

    #[error("email already exists")]
    Conflict,

    /// Unknown email or wrong password. Both read the same.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthorized(String),

    /// The identity or session store failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl RegistrationError {
    /// The HTTP status an HTTP layer would answer with.
    pub fn status_hint(&self) -> u16 {
        match self {
            RegistrationError::Validation(_)
            | RegistrationError::Conflict
            | RegistrationError::InvalidCredentials => 400,
            RegistrationError::Unauthorized(_) => 401,
            RegistrationError::Persistence(_) | RegistrationError::Hashing(_) => 500,
        }
    }

    /// The `{ "message": ... }` body for this error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody::new(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_hints() {
        assert_eq!(RegistrationError::Validation("name".into()).status_hint(), 400);
        assert_eq!(RegistrationError::Conflict.status_hint(), 400);
        assert_eq!(RegistrationError::Unauthorized("Not authorized".into()).status_hint(), 401);
        assert_eq!(RegistrationError::Persistence("closed".into()).status_hint(), 500);
    }

    #[test]
    fn test_body_carries_display_message() {
        assert_eq!(
            RegistrationError::Validation("email".into()).body().to_json(),
            r#"{"message":"missing field: email"}"#
        );
    }
}
