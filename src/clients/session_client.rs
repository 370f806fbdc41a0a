//! # Session Client
//!
//! Opens, resolves and closes sessions on the Session actor. Sessions expire `ttl` after
//! login: an expired token no longer resolves, and each login sweeps expired records out
//! of the actor so abandoned sessions do not pile up.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{IdentityId, Session, SessionCreate, SessionQuery, SessionToken};
use crate::session_actor::SessionError;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Default session lifetime: 30 days.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
    ttl: Duration,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>, ttl: Duration) -> Self {
        Self { inner, ttl }
    }

    /// Starts a session for `identity_id` and returns it, token included.
    #[instrument(skip(self))]
    pub async fn open(&self, identity_id: IdentityId) -> Result<Session, SessionError> {
        let now = Instant::now();
        self.sweep(now).await?;

        debug!("Sending request");
        self.inner
            .create(SessionCreate {
                identity_id,
                expires_at: now + self.ttl,
            })
            .await
            .map_err(Self::map_error)
    }

    /// Looks up the session behind a raw bearer token. Malformed and expired tokens resolve
    /// to `None`.
    #[instrument(skip_all)]
    pub async fn resolve(&self, raw_token: &str) -> Result<Option<Session>, SessionError> {
        let Some(token) = SessionToken::parse(raw_token) else {
            debug!("Malformed token");
            return Ok(None);
        };
        match self.get(token).await? {
            Some(session) if session.is_expired(Instant::now()) => {
                debug!(identity_id = %session.identity_id, "Session expired");
                match self.delete(session.token).await {
                    Ok(_) | Err(SessionError::NotFound(_)) => Ok(None),
                    Err(e) => Err(e),
                }
            }
            found => Ok(found),
        }
    }

    /// Ends the session behind a raw bearer token.
    #[instrument(skip_all)]
    pub async fn close(&self, raw_token: &str) -> Result<Session, SessionError> {
        let token = SessionToken::parse(raw_token)
            .ok_or_else(|| SessionError::NotFound("malformed token".into()))?;
        self.delete(token).await
    }

    /// Deletes every session expired at `now`.
    async fn sweep(&self, now: Instant) -> Result<(), SessionError> {
        let expired = self.list(SessionQuery::expired_at(now)).await?;
        if expired.is_empty() {
            return Ok(());
        }
        let count = expired.len();
        for session in expired {
            match self.delete(session.token).await {
                // Raced with a logout
                Ok(_) | Err(SessionError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        info!(count, "Swept expired sessions");
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Session> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<Session> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(token) => SessionError::NotFound(token),
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}
