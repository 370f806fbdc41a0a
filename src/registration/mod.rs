//! # Registration
//!
//! Account registration and the session endpoints around it.
//!
//! [`RegistrationService::register`] validates the three fields, refuses an email that is
//! already on file, hashes the password with bcrypt and persists the record through the
//! [`IdentityRepository`] port. What comes back is a [`PublicIdentity`]; the hash never
//! leaves this module.
//!
//! `login`, `me` and `logout` manage bearer-token sessions on the session actor.

pub mod error;
pub mod password;
pub mod repository;

pub use error::RegistrationError;
pub use repository::IdentityRepository;

use crate::clients::SessionClient;
use crate::identity_actor::IdentityError;
use crate::model::{AuthSession, IdentityCreate, PublicIdentity};
use crate::session_actor::SessionError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, instrument, warn};

pub const DEFAULT_BCRYPT_COST: u32 = 10;

const NO_TOKEN: &str = "Not authorized, no token";
const NOT_AUTHORIZED: &str = "Not authorized";
const DECOY_PASSWORD: &str = "decoy password for unknown accounts";

#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Registers accounts and opens sessions for them.
#[derive(Clone)]
pub struct RegistrationService<R> {
    repository: R,
    sessions: SessionClient,
    bcrypt_cost: u32,
    /// Verified against on logins for unknown emails, so they cost as much as a wrong password.
    decoy_hash: Arc<OnceCell<String>>,
}

impl<R: IdentityRepository> RegistrationService<R> {
    pub fn new(repository: R, sessions: SessionClient, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            sessions,
            bcrypt_cost,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Creates an account and returns its public projection.
    ///
    /// Validation happens before the repository is consulted; a duplicate email fails with
    /// [`RegistrationError::Conflict`], including the case where a concurrent registration
    /// wins the race between lookup and insert.
    #[instrument(skip(self))]
    pub async fn register(&self, request: RegisterRequest) -> Result<PublicIdentity, RegistrationError> {
        let name = require("name", &request.name)?;
        let email = require("email", &request.email)?;
        require("password", &request.password)?;

        if self
            .repository
            .find_by_email(email)
            .await
            .map_err(persistence)?
            .is_some()
        {
            warn!(email, "Email already registered");
            return Err(RegistrationError::Conflict);
        }

        let password_hash = password::hash_password(request.password, self.bcrypt_cost).await?;
        let record = IdentityCreate {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        };

        let identity = self.repository.create(record).await.map_err(|e| match e {
            IdentityError::EmailTaken(_) => RegistrationError::Conflict,
            other => persistence(other),
        })?;

        info!(identity_id = %identity.id, "Registered identity");
        Ok(identity.public())
    }

    /// Checks the credentials and opens a session.
    #[instrument(skip(self))]
    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, RegistrationError> {
        let email = require("email", &request.email)?;
        require("password", &request.password)?;

        let Some(identity) = self
            .repository
            .find_by_email(email)
            .await
            .map_err(persistence)?
        else {
            warn!(email, "Login for unknown email");
            self.verify_decoy(request.password).await?;
            return Err(RegistrationError::InvalidCredentials);
        };

        let verified =
            password::verify_password(request.password, identity.password_hash.clone()).await?;
        if !verified {
            warn!(identity_id = %identity.id, "Login with wrong password");
            return Err(RegistrationError::InvalidCredentials);
        }

        let session = self
            .sessions
            .open(identity.id.clone())
            .await
            .map_err(|e| RegistrationError::Persistence(e.to_string()))?;

        info!(identity_id = %identity.id, "Opened session");
        Ok(AuthSession {
            identity: identity.public(),
            token: session.token.expose(),
        })
    }

    /// Resolves a bearer token to the account behind it.
    #[instrument(skip_all)]
    pub async fn me(&self, token: &str) -> Result<PublicIdentity, RegistrationError> {
        if token.trim().is_empty() {
            return Err(RegistrationError::Unauthorized(NO_TOKEN.into()));
        }
        let session = self
            .sessions
            .resolve(token)
            .await
            .map_err(|e| RegistrationError::Persistence(e.to_string()))?
            .ok_or_else(|| RegistrationError::Unauthorized(NOT_AUTHORIZED.into()))?;

        self.repository
            .find_by_id(session.identity_id)
            .await
            .map_err(persistence)?
            .map(|identity| identity.public())
            .ok_or_else(|| RegistrationError::Unauthorized(NOT_AUTHORIZED.into()))
    }

    /// Ends the session behind a bearer token.
    #[instrument(skip_all)]
    pub async fn logout(&self, token: &str) -> Result<(), RegistrationError> {
        if token.trim().is_empty() {
            return Err(RegistrationError::Unauthorized(NO_TOKEN.into()));
        }
        match self.sessions.close(token).await {
            Ok(session) => {
                info!(identity_id = %session.identity_id, "Closed session");
                Ok(())
            }
            Err(SessionError::NotFound(_)) => {
                Err(RegistrationError::Unauthorized(NOT_AUTHORIZED.into()))
            }
            Err(e) => Err(RegistrationError::Persistence(e.to_string())),
        }
    }
}

impl<R> RegistrationService<R> {
    /// Runs a full bcrypt verify whose result is discarded.
    async fn verify_decoy(&self, password: String) -> Result<(), RegistrationError> {
        let decoy = self
            .decoy_hash
            .get_or_try_init(|| password::hash_password(DECOY_PASSWORD.into(), self.bcrypt_cost))
            .await?;
        password::verify_password(password, decoy.clone()).await?;
        Ok(())
    }
}

fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, RegistrationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrationError::Validation(field.to_string()));
    }
    Ok(trimmed)
}

fn persistence(e: IdentityError) -> RegistrationError {
    RegistrationError::Persistence(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::session_client::DEFAULT_SESSION_TTL;
    use crate::clients::IdentityClient;
    use crate::{identity_actor, session_actor};

    fn service() -> RegistrationService<IdentityClient> {
        let (identity_actor, identities) = identity_actor::new(8);
        let (session_actor, sessions) = session_actor::new(8, DEFAULT_SESSION_TTL);
        tokio::spawn(identity_actor.run(()));
        tokio::spawn(session_actor.run(()));
        RegistrationService::new(identities, sessions, 4)
    }

    #[tokio::test]
    async fn test_register_returns_public_identity() {
        let service = service();
        let identity = service
            .register(RegisterRequest::new("Ann", "ann@example.com", "pw123456"))
            .await
            .unwrap();

        assert_eq!(identity.name, "Ann");
        assert_eq!(identity.email, "ann@example.com");
        let json = serde_json::to_value(&identity).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(json.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_case_insensitively() {
        let service = service();
        service
            .register(RegisterRequest::new("Ann", "ann@example.com", "pw123456"))
            .await
            .unwrap();

        let result = service
            .register(RegisterRequest::new("Other Ann", " ANN@example.com", "different"))
            .await;
        assert_eq!(result.unwrap_err(), RegistrationError::Conflict);
    }

    #[tokio::test]
    async fn test_login_me_logout() {
        let service = service();
        let registered = service
            .register(RegisterRequest::new("Ann", "ann@example.com", "pw123456"))
            .await
            .unwrap();

        let wrong = service
            .login(LoginRequest::new("ann@example.com", "nope"))
            .await;
        assert_eq!(wrong.unwrap_err(), RegistrationError::InvalidCredentials);
        let unknown = service
            .login(LoginRequest::new("bob@example.com", "pw123456"))
            .await;
        assert_eq!(unknown.unwrap_err(), RegistrationError::InvalidCredentials);

        let session = service
            .login(LoginRequest::new("Ann@Example.com", "pw123456"))
            .await
            .unwrap();
        assert_eq!(session.identity, registered);
        assert_eq!(service.me(&session.token).await.unwrap(), registered);

        service.logout(&session.token).await.unwrap();
        assert_eq!(
            service.me(&session.token).await.unwrap_err(),
            RegistrationError::Unauthorized(NOT_AUTHORIZED.into())
        );
        assert_eq!(
            service.logout(&session.token).await.unwrap_err(),
            RegistrationError::Unauthorized(NOT_AUTHORIZED.into())
        );
    }

    #[tokio::test]
    async fn test_unknown_email_still_runs_a_verify() {
        let service = service();
        assert!(service.decoy_hash.get().is_none());

        let result = service
            .login(LoginRequest::new("nobody@example.com", "pw123456"))
            .await;

        assert_eq!(result.unwrap_err(), RegistrationError::InvalidCredentials);
        let decoy = service.decoy_hash.get().expect("decoy hash not built");
        assert!(decoy.starts_with("$2b$04$"));
    }

    #[tokio::test]
    async fn test_me_without_token() {
        let service = service();
        assert_eq!(
            service.me("  ").await.unwrap_err(),
            RegistrationError::Unauthorized(NO_TOKEN.into())
        );
        assert_eq!(
            service.me("not-a-token").await.unwrap_err(),
            RegistrationError::Unauthorized(NOT_AUTHORIZED.into())
        );
    }
}
