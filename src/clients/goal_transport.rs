//! # In-Process Goal Transport
//!
//! Lets a [`ResourceStore`](crate::store::ResourceStore) talk to [`GoalApi`] directly.
//! Errors are shaped like an HTTP error response: the status hint plus a `{ message }` body.

use crate::api::GoalApi;
use crate::goal_actor::GoalError;
use crate::model::{Deleted, ErrorBody, Goal, GoalDraft, GoalId};
use crate::store::{ResourceTransport, StoreItem, TransportError};
use async_trait::async_trait;
use tracing::{debug, instrument};

impl StoreItem for Goal {
    type Id = GoalId;

    fn id(&self) -> &GoalId {
        &self.id
    }
}

#[derive(Clone)]
pub struct InProcessGoalTransport {
    api: GoalApi,
}

impl InProcessGoalTransport {
    pub fn new(api: GoalApi) -> Self {
        Self { api }
    }
}

fn to_transport_error(e: GoalError) -> TransportError {
    debug!(error = %e, "Goal request failed");
    TransportError::from_response(e.status_hint(), Some(ErrorBody::new(e.to_string())))
}

#[async_trait]
impl ResourceTransport for InProcessGoalTransport {
    type Item = Goal;
    type Draft = GoalDraft;

    #[instrument(skip_all)]
    async fn create_item(&self, data: GoalDraft, token: &str) -> Result<Goal, TransportError> {
        self.api.create(token, data).await.map_err(to_transport_error)
    }

    #[instrument(skip_all)]
    async fn list_items(&self, token: &str) -> Result<Vec<Goal>, TransportError> {
        self.api.list(token).await.map_err(to_transport_error)
    }

    #[instrument(skip(self, token))]
    async fn delete_item(&self, id: GoalId, token: &str) -> Result<Deleted<GoalId>, TransportError> {
        self.api.delete(token, id).await.map_err(to_transport_error)
    }
}
