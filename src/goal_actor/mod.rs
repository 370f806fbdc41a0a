//! # Goal Actor
//!
//! Server-side storage for goals. Every goal records its owner; the
//! [`GoalApi`](crate::api::GoalApi) enforces that callers only see and change their own.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Goal`]
//! - [`error`] - [`GoalError`], with an HTTP status hint per variant
//! - [`new()`] - Factory function that creates the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::GoalClient;
use crate::framework::ResourceActor;
use crate::model::Goal;

/// Creates a new Goal actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Goal>, GoalClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, GoalClient::new(generic_client))
}
