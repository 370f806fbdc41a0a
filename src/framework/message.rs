//! # Generic Messages
//!
//! Message types exchanged between the `ResourceClient` and the `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// The variants map onto the CRUD operations every stored resource supports, plus `List`
/// for collection reads filtered by the entity's [`ActorEntity::Query`].
///
/// - **Create**: mints an id, builds the entity from [`ActorEntity::Create`], returns the stored entity.
/// - **Get**: fetches one entity by id.
/// - **List**: returns every entity matching the query, in insertion order.
/// - **Update**: applies [`ActorEntity::Update`] and returns the new state.
/// - **Delete**: removes the entity and returns what was removed.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}
