//! # Session Actor
//!
//! Maps bearer tokens to identities. Login creates a session, logout deletes it, and every
//! authenticated goal request resolves its token here first. Sessions carry an expiry;
//! [`SessionClient`] drops expired ones on lookup and on each login.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SessionClient;
use crate::framework::ResourceActor;
use crate::model::Session;
use std::time::Duration;

/// Creates a new Session actor and a client that issues sessions lasting `ttl`.
pub fn new(buffer_size: usize, ttl: Duration) -> (ResourceActor<Session>, SessionClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SessionClient::new(generic_client, ttl))
}
