//! # Identity Actor
//!
//! Stores registered accounts. It stands in for the external identity datastore: the
//! registration service only sees it through the
//! [`IdentityRepository`](crate::registration::IdentityRepository) port.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Identity`]
//! - [`error`] - [`IdentityError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ```rust
//! use goal_tracker::identity_actor;
//! use goal_tracker::model::IdentityCreate;
//! use goal_tracker::registration::IdentityRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = identity_actor::new(16);
//!     tokio::spawn(actor.run(()));
//!
//!     let record = IdentityCreate {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!         password_hash: "$2b$10$...".to_string(),
//!     };
//!     client.create(record).await?;
//!     assert!(client.find_by_email("ALICE@example.com").await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::IdentityClient;
use crate::framework::ResourceActor;
use crate::model::Identity;

/// Creates a new Identity actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Identity>, IdentityClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, IdentityClient::new(generic_client))
}
