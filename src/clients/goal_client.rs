//! # Goal Client
//!
//! Wraps a `ResourceClient<Goal>`; entity validation errors come back as [`GoalError`]s.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::goal_actor::GoalError;
use crate::model::{Goal, GoalCreate, GoalId, GoalUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Goal actor.
#[derive(Clone)]
pub struct GoalClient {
    inner: ResourceClient<Goal>,
}

impl GoalClient {
    pub fn new(inner: ResourceClient<Goal>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_goal(&self, params: GoalCreate) -> Result<Goal, GoalError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_goal(&self, id: GoalId, update: GoalUpdate) -> Result<Goal, GoalError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Goal> for GoalClient {
    type Error = GoalError;

    fn inner(&self) -> &ResourceClient<Goal> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => GoalError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<GoalError>() {
                Ok(goal_error) => *goal_error,
                Err(other) => GoalError::ActorCommunicationError(other.to_string()),
            },
            other => GoalError::ActorCommunicationError(other.to_string()),
        }
    }
}
