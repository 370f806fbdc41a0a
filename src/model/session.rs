use crate::model::{IdentityId, PublicIdentity};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Instant;
use uuid::Uuid;

/// Opaque bearer token. Doubles as the session record's id.
///
/// `Debug` and `Display` print `<redacted>`, so the token stays out of logs and error
/// messages even where it travels as an actor id. [`SessionToken::expose`] yields the wire
/// form handed to the client.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Uuid);

impl From<Uuid> for SessionToken {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

impl SessionToken {
    /// Parses the wire form of a token. Anything that is not a UUID is not a token.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    /// The wire form. Only for handing the token to its owner.
    pub fn expose(&self) -> String {
        self.0.to_string()
    }
}

/// A logged-in session binding a token to an identity until `expires_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: SessionToken,
    pub identity_id: IdentityId,
    pub expires_at: Instant,
}

impl Session {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub identity_id: IdentityId,
    pub expires_at: Instant,
}

/// Sessions are never edited; logout deletes them.
#[derive(Debug)]
pub enum SessionUpdate {}

/// Filter for listing sessions. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct SessionQuery {
    pub identity_id: Option<IdentityId>,
    /// Only sessions already expired at this instant.
    pub expired_at: Option<Instant>,
}

impl SessionQuery {
    pub fn expired_at(now: Instant) -> Self {
        Self {
            identity_id: None,
            expired_at: Some(now),
        }
    }
}

/// What a successful login hands to the client.
///
/// This is the "current user" a client keeps around; its token authorizes goal requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    #[serde(flatten)]
    pub identity: PublicIdentity,
    pub token: String,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("identity", &self.identity)
            .field("token", &"<redacted>")
            .finish()
    }
}
