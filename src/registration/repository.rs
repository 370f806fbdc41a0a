//! The datastore port the registration service depends on.

use crate::identity_actor::IdentityError;
use crate::model::{Identity, IdentityCreate, IdentityId};
use async_trait::async_trait;

/// Lookup and persistence of identity records.
///
/// [`IdentityClient`](crate::clients::IdentityClient) is the in-process implementation.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Finds the record whose email matches, ignoring case and surrounding whitespace.
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError>;

    async fn find_by_id(&self, id: IdentityId) -> Result<Option<Identity>, IdentityError>;

    /// Persists a new record. Fails with [`IdentityError::EmailTaken`] if the email is in use.
    async fn create(&self, record: IdentityCreate) -> Result<Identity, IdentityError>;
}
