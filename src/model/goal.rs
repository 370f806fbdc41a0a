//! A goal owned by one identity.
//!
//! # Actor Framework
//! Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
//! [`goal_actor`](crate::goal_actor) for the trait implementation. The owner is fixed at
//! creation; `List` requests filter by owner.

use crate::model::IdentityId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for goals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(pub Uuid);

impl From<Uuid> for GoalId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub owner: IdentityId,
    pub text: String,
}

/// What a client submits: the domain fields only. The owner comes from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub text: String,
}

impl GoalDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Payload for storing a new goal.
#[derive(Debug, Clone)]
pub struct GoalCreate {
    pub owner: IdentityId,
    pub text: String,
}

/// Payload for editing a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub text: String,
}

/// Filter for listing goals.
#[derive(Debug, Clone, Default)]
pub struct GoalQuery {
    pub owner: Option<IdentityId>,
}

impl GoalQuery {
    pub fn owned_by(owner: IdentityId) -> Self {
        Self { owner: Some(owner) }
    }
}

/// Success payload of a delete: the id of the removed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted<Id> {
    pub id: Id,
}
