//! [`ActorEntity`] implementation for [`Goal`].

use super::GoalError;
use crate::framework::ActorEntity;
use crate::model::{Goal, GoalCreate, GoalId, GoalQuery, GoalUpdate};
use async_trait::async_trait;

const MISSING_TEXT: &str = "Please add a text field";

#[async_trait]
impl ActorEntity for Goal {
    type Id = GoalId;
    type Create = GoalCreate;
    type Update = GoalUpdate;
    type Query = GoalQuery;
    type Context = ();
    type Error = GoalError;

    fn from_create_params(id: GoalId, params: GoalCreate) -> Result<Self, GoalError> {
        let text = params.text.trim();
        if text.is_empty() {
            return Err(GoalError::Validation(MISSING_TEXT.into()));
        }
        Ok(Self {
            id,
            owner: params.owner,
            text: text.to_string(),
        })
    }

    fn matches(&self, query: &GoalQuery) -> bool {
        query
            .owner
            .as_ref()
            .map_or(true, |owner| &self.owner == owner)
    }

    /// Replaces the text; the owner never changes.
    async fn on_update(&mut self, update: GoalUpdate, _ctx: &()) -> Result<(), GoalError> {
        let text = update.text.trim();
        if text.is_empty() {
            return Err(GoalError::Validation(MISSING_TEXT.into()));
        }
        self.text = text.to_string();
        Ok(())
    }
}
