use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for identity records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(pub Uuid);

impl From<Uuid> for IdentityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for IdentityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored user account.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
/// [`identity_actor`](crate::identity_actor) for the trait implementation. The email is the
/// store's unique key.
///
/// This type never leaves the backend: it has no `Serialize` impl and its `Debug` output
/// redacts the hash. Hand out [`PublicIdentity`] instead.
#[derive(Clone, PartialEq)]
pub struct Identity {
    pub id: IdentityId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl Identity {
    /// The client-safe projection of this record.
    pub fn public(&self) -> PublicIdentity {
        PublicIdentity {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Payload for persisting a new identity. The password is already hashed.
#[derive(Clone)]
pub struct IdentityCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl std::fmt::Debug for IdentityCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Identities are not edited after registration, so the update type has no values.
#[derive(Debug)]
pub enum IdentityUpdate {}

/// Filter for listing identities.
#[derive(Debug, Clone, Default)]
pub struct IdentityQuery {
    /// Normalized email (see [`normalize_email`]); `None` matches every record.
    pub email: Option<String>,
}

impl IdentityQuery {
    pub fn by_email(email: &str) -> Self {
        Self {
            email: Some(normalize_email(email)),
        }
    }
}

/// What registration returns: everything except the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIdentity {
    pub id: IdentityId,
    pub name: String,
    pub email: String,
}

/// Canonical form used for the uniqueness check and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
