//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every stored resource (Identity, Session,
//! Goal) implements to be managed by the generic `ResourceActor`. It specifies associated types
//! for IDs, DTOs, queries, context, and errors, and provides lifecycle hooks (`on_create`,
//! `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::unique_key`]
//!
//! The defaults do nothing (`Ok(())` / `None`), so an entity only overrides what it needs.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks. The `Context`
/// type is injected into every hook when the actor is started with `run(context)`, so
/// dependencies are bound late instead of at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Opaque identifier. The actor mints a fresh v4 UUID for every create.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<Uuid>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Filter used by `List` requests (e.g. "goals owned by X").
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Per-actor error type, boxed into `FrameworkError::EntityError` on the way out.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the minted ID and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity belongs in the result of a `List` request.
    fn matches(&self, query: &Self::Query) -> bool;

    /// Key that must be unique across the store, if any.
    ///
    /// The actor rejects a create whose key is already held by a stored entity with
    /// `FrameworkError::Conflict`. The check and the insert happen inside the same message,
    /// so concurrent creates cannot both win.
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
