//! # Identity Client
//!
//! Wraps a `ResourceClient<Identity>` and exposes it as the registration service's
//! [`IdentityRepository`] port.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::identity_actor::IdentityError;
use crate::model::{Identity, IdentityCreate, IdentityId, IdentityQuery};
use crate::registration::IdentityRepository;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Identity actor.
#[derive(Clone)]
pub struct IdentityClient {
    inner: ResourceClient<Identity>,
}

impl IdentityClient {
    pub fn new(inner: ResourceClient<Identity>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Identity> for IdentityClient {
    type Error = IdentityError;

    fn inner(&self) -> &ResourceClient<Identity> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Conflict(email) => IdentityError::EmailTaken(email),
            FrameworkError::EntityError(inner) => match inner.downcast::<IdentityError>() {
                Ok(identity_error) => *identity_error,
                Err(other) => IdentityError::ActorCommunicationError(other.to_string()),
            },
            other => IdentityError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl IdentityRepository for IdentityClient {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError> {
        debug!("Sending request");
        let mut matches = self.list(IdentityQuery::by_email(email)).await?;
        Ok(matches.pop())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: IdentityId) -> Result<Option<Identity>, IdentityError> {
        self.get(id).await
    }

    #[instrument(skip(self))]
    async fn create(&self, record: IdentityCreate) -> Result<Identity, IdentityError> {
        debug!("Sending request");
        self.inner.create(record).await.map_err(Self::map_error)
    }
}
