//! # Goal API
//!
//! Token-authenticated goal operations. Every call first resolves the bearer token to an
//! identity; goals are listed by owner, and updating or deleting someone else's goal is
//! refused.

use crate::clients::{GoalClient, SessionClient};
use crate::framework::ActorClient;
use crate::goal_actor::GoalError;
use crate::model::{Deleted, Goal, GoalCreate, GoalDraft, GoalId, GoalQuery, GoalUpdate, IdentityId};
use tracing::{info, instrument, warn};

const NO_TOKEN: &str = "Not authorized, no token";
const NOT_AUTHORIZED: &str = "Not authorized";
const NOT_OWNER: &str = "User not authorized";

#[derive(Clone)]
pub struct GoalApi {
    goals: GoalClient,
    sessions: SessionClient,
}

impl GoalApi {
    pub fn new(goals: GoalClient, sessions: SessionClient) -> Self {
        Self { goals, sessions }
    }

    /// Resolves a bearer token to its owner.
    pub async fn authenticate(&self, token: &str) -> Result<IdentityId, GoalError> {
        if token.trim().is_empty() {
            return Err(GoalError::Unauthorized(NO_TOKEN.into()));
        }
        let session = self
            .sessions
            .resolve(token)
            .await
            .map_err(|e| GoalError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| GoalError::Unauthorized(NOT_AUTHORIZED.into()))?;
        Ok(session.identity_id)
    }

    #[instrument(skip(self, token))]
    pub async fn create(&self, token: &str, draft: GoalDraft) -> Result<Goal, GoalError> {
        let owner = self.authenticate(token).await?;
        let goal = self
            .goals
            .create_goal(GoalCreate {
                owner,
                text: draft.text,
            })
            .await?;
        info!(goal_id = %goal.id, owner = %goal.owner, "Goal created");
        Ok(goal)
    }

    /// The caller's goals, oldest first.
    #[instrument(skip_all)]
    pub async fn list(&self, token: &str) -> Result<Vec<Goal>, GoalError> {
        let owner = self.authenticate(token).await?;
        self.goals.list(GoalQuery::owned_by(owner)).await
    }

    #[instrument(skip(self, token))]
    pub async fn update(&self, token: &str, id: GoalId, update: GoalUpdate) -> Result<Goal, GoalError> {
        let owner = self.authenticate(token).await?;
        self.owned(&owner, id.clone()).await?;
        self.goals.update_goal(id, update).await
    }

    #[instrument(skip(self, token))]
    pub async fn delete(&self, token: &str, id: GoalId) -> Result<Deleted<GoalId>, GoalError> {
        let owner = self.authenticate(token).await?;
        self.owned(&owner, id.clone()).await?;
        let removed = self.goals.delete(id).await?;
        info!(goal_id = %removed.id, "Goal deleted");
        Ok(Deleted { id: removed.id })
    }

    /// Fetches a goal and checks that `owner` holds it.
    async fn owned(&self, owner: &IdentityId, id: GoalId) -> Result<Goal, GoalError> {
        let goal = self
            .goals
            .get(id.clone())
            .await?
            .ok_or_else(|| GoalError::NotFound(id.to_string()))?;
        if &goal.owner != owner {
            warn!(goal_id = %goal.id, caller = %owner, "Goal belongs to another user");
            return Err(GoalError::Unauthorized(NOT_OWNER.into()));
        }
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::session_client::DEFAULT_SESSION_TTL;
    use crate::{goal_actor, session_actor};
    use uuid::Uuid;

    async fn api_with_two_users() -> (GoalApi, String, String) {
        let (goal_actor, goals) = goal_actor::new(8);
        let (session_actor, sessions) = session_actor::new(8, DEFAULT_SESSION_TTL);
        tokio::spawn(goal_actor.run(()));
        tokio::spawn(session_actor.run(()));

        let ann = sessions.open(IdentityId::from(Uuid::new_v4())).await.unwrap();
        let bob = sessions.open(IdentityId::from(Uuid::new_v4())).await.unwrap();
        (
            GoalApi::new(goals, sessions),
            ann.token.expose(),
            bob.token.expose(),
        )
    }

    #[tokio::test]
    async fn test_goals_are_scoped_to_owner() {
        let (api, ann, bob) = api_with_two_users().await;
        let run = api.create(&ann, GoalDraft::new("Run 5k")).await.unwrap();
        api.create(&bob, GoalDraft::new("Read")).await.unwrap();

        let listed = api.list(&ann).await.unwrap();
        assert_eq!(listed, vec![run.clone()]);

        let err = api.delete(&bob, run.id.clone()).await.unwrap_err();
        assert_eq!(err, GoalError::Unauthorized(NOT_OWNER.into()));
        assert_eq!(err.status_hint(), 401);

        let err = api
            .update(&bob, run.id.clone(), GoalUpdate { text: "Walk".into() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), NOT_OWNER);

        let deleted = api.delete(&ann, run.id.clone()).await.unwrap();
        assert_eq!(deleted.id, run.id);
        assert!(api.list(&ann).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_validation() {
        let (api, ann, _) = api_with_two_users().await;
        let goal = api.create(&ann, GoalDraft::new("Run 5k")).await.unwrap();

        let updated = api
            .update(&ann, goal.id.clone(), GoalUpdate { text: "Run 10k".into() })
            .await
            .unwrap();
        assert_eq!(updated.text, "Run 10k");

        let err = api.create(&ann, GoalDraft::new("  ")).await.unwrap_err();
        assert_eq!(err.to_string(), "Please add a text field");
        assert_eq!(err.status_hint(), 400);
    }

    #[tokio::test]
    async fn test_missing_unknown_token_and_goal() {
        let (api, ann, _) = api_with_two_users().await;

        assert_eq!(
            api.list("").await.unwrap_err(),
            GoalError::Unauthorized(NO_TOKEN.into())
        );
        assert_eq!(
            api.list(&Uuid::new_v4().to_string()).await.unwrap_err(),
            GoalError::Unauthorized(NOT_AUTHORIZED.into())
        );

        let err = api
            .delete(&ann, GoalId::from(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, GoalError::NotFound(_)));
        assert_eq!(err.to_string(), "Goal not found");
    }
}
