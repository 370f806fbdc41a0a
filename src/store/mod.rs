//! # Resource Store
//!
//! Client-side mirror of a remote collection. A [`ResourceStore`] dispatches create, list
//! and delete requests through a [`ResourceTransport`] and records each request's
//! lifecycle (`Idle -> Pending -> Fulfilled | Rejected`) in a [`StoreState`].
//!
//! - Every operation takes the caller's [`SessionContext`]. Without a token the operation
//!   is rejected with "Not authorized, no token" and the transport is never called.
//! - Failures never escape as `Err`: they become the rejected state, with a message taken
//!   from [`TransportError::rejection_message`].
//! - State is published through a `tokio::sync::watch` channel; [`ResourceStore::subscribe`]
//!   sees every transition.
//!
//! ```rust
//! use goal_tracker::lifecycle::GoalSystem;
//! use goal_tracker::model::GoalDraft;
//! use goal_tracker::registration::{LoginRequest, RegisterRequest};
//! use goal_tracker::config::AppConfig;
//! use goal_tracker::store::ResourceStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig { bcrypt_cost: 4, ..AppConfig::default() };
//!     let system = GoalSystem::new(&config);
//!     system.registration.register(RegisterRequest::new("Ann", "ann@example.com", "pw")).await?;
//!     let session = system.registration.login(LoginRequest::new("ann@example.com", "pw")).await?;
//!
//!     let store = ResourceStore::new(system.transport());
//!     store.create(&session, GoalDraft::new("Run 5k")).await;
//!     assert_eq!(store.snapshot().items.len(), 1);
//!
//!     drop(store);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod session;
pub mod state;
pub mod transport;

pub use session::{CurrentUser, SessionContext};
pub use state::{OperationKind, OperationStatus, Operations, StoreState};
pub use transport::{ErrorResponse, ItemId, ResourceTransport, StoreItem, TransportError};

use session::bearer_token;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Rejection message when the session has no token.
pub const AUTH_MISSING: &str = "Not authorized, no token";

/// State container for one session's items.
pub struct ResourceStore<X: ResourceTransport> {
    transport: X,
    state: watch::Sender<StoreState<X::Item>>,
    next_request: AtomicU64,
}

impl<X: ResourceTransport> ResourceStore<X> {
    pub fn new(transport: X) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            transport,
            state,
            next_request: AtomicU64::new(1),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> StoreState<X::Item> {
        self.state.borrow().clone()
    }

    /// A receiver that is notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<StoreState<X::Item>> {
        self.state.subscribe()
    }

    /// Creates an item and appends the server's copy.
    ///
    /// Returns this request's own outcome, whether or not a newer create has overtaken it.
    #[instrument(skip_all, fields(operation = "create"))]
    pub async fn create<S>(&self, session: &S, data: X::Draft) -> OperationStatus<X::Item>
    where
        S: SessionContext + ?Sized,
    {
        let request_id = self.begin(OperationKind::Create);
        let Some(token) = bearer_token(session) else {
            return self.reject(OperationKind::Create, request_id, AUTH_MISSING.to_string());
        };

        debug!(request_id, ?data, "Dispatching");
        match self.transport.create_item(data, &token).await {
            Ok(item) => {
                info!(request_id, item_id = %item.id(), "Created");
                self.state
                    .send_modify(|state| state.create_fulfilled(request_id, item.clone()));
                OperationStatus::Fulfilled(item)
            }
            Err(e) => self.reject(OperationKind::Create, request_id, e.rejection_message()),
        }
    }

    /// Fetches every item and replaces the local list with it.
    #[instrument(skip_all, fields(operation = "list"))]
    pub async fn list_all<S>(&self, session: &S) -> OperationStatus<usize>
    where
        S: SessionContext + ?Sized,
    {
        let request_id = self.begin(OperationKind::List);
        let Some(token) = bearer_token(session) else {
            return self.reject(OperationKind::List, request_id, AUTH_MISSING.to_string());
        };

        debug!(request_id, "Dispatching");
        match self.transport.list_items(&token).await {
            Ok(items) => {
                let count = items.len();
                info!(request_id, count, "Listed");
                self.state
                    .send_modify(|state| state.list_fulfilled(request_id, items));
                OperationStatus::Fulfilled(count)
            }
            Err(e) => self.reject(OperationKind::List, request_id, e.rejection_message()),
        }
    }

    /// Deletes an item. On success the item named by the server's payload is removed.
    #[instrument(skip_all, fields(operation = "delete", %id))]
    pub async fn delete<S>(&self, session: &S, id: ItemId<X>) -> OperationStatus<ItemId<X>>
    where
        S: SessionContext + ?Sized,
    {
        let request_id = self.begin(OperationKind::Delete);
        let Some(token) = bearer_token(session) else {
            return self.reject(OperationKind::Delete, request_id, AUTH_MISSING.to_string());
        };

        debug!(request_id, "Dispatching");
        match self.transport.delete_item(id, &token).await {
            Ok(deleted) => {
                info!(request_id, item_id = %deleted.id, "Deleted");
                self.state
                    .send_modify(|state| state.delete_fulfilled(request_id, deleted.id.clone()));
                OperationStatus::Fulfilled(deleted.id)
            }
            Err(e) => self.reject(OperationKind::Delete, request_id, e.rejection_message()),
        }
    }

    /// Clears the flags and every operation status. Items are kept.
    pub fn reset(&self) {
        debug!("Reset");
        self.state.send_modify(|state| state.reset());
    }

    /// Back to the initial state, items included.
    pub fn clear(&self) {
        debug!("Clear");
        self.state.send_modify(|state| *state = StoreState::default());
    }

    fn begin(&self, kind: OperationKind) -> u64 {
        let request_id = self.next_request.fetch_add(1, Ordering::Relaxed);
        self.state.send_modify(|state| state.begin(kind, request_id));
        request_id
    }

    fn reject<P>(&self, kind: OperationKind, request_id: u64, message: String) -> OperationStatus<P> {
        warn!(%kind, request_id, %message, "Rejected");
        self.state
            .send_modify(|state| state.rejected(kind, request_id, message.clone()));
        OperationStatus::Rejected(message)
    }
}
