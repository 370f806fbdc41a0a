//! # Mock Framework
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of an actor. Use it to test code that sits *around* a
//! client (for example the registration service over the identity store) without spawning
//! the actor.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | none, scripted replies | real store |
//! | **Error Injection** | `return_err` | needs a specific state |
//! | **Use Case** | logic around the client | the actor itself or the full system |
//!
//! Expectations are consumed in order. A request that does not match the next expectation
//! (wrong operation or wrong id) panics inside the mock task, which surfaces in the test as
//! `FrameworkError::ActorDropped`; [`MockClient::verify`] then reports what is left.
//!
//! ```rust
//! use goal_tracker::framework::mock::MockClient;
//! use goal_tracker::framework::FrameworkError;
//! use goal_tracker::model::Identity;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Identity>::new();
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let result = client.list(Default::default()).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to send back.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// ```ignore
/// let mut mock = MockClient::<Identity>::new();
/// mock.expect_list().return_ok(vec![]);
/// mock.expect_create().return_ok(identity);
///
/// let repo = IdentityClient::new(mock.client());
/// // exercise code under test...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime; the replies come from a background task.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "MockClient: unexpected id for get");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "MockClient: unexpected id for update");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "MockClient: unexpected id for delete");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("MockClient: unexpected request {:?}", RequestKind::of(&request));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation (any query).
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R: 'static>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Reply with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[derive(Debug)]
enum RequestKind {
    Create,
    Get,
    List,
    Update,
    Delete,
}

impl RequestKind {
    fn of<T: ActorEntity>(request: &ResourceRequest<T>) -> Self {
        match request {
            ResourceRequest::Create { .. } => Self::Create,
            ResourceRequest::Get { .. } => Self::Get,
            ResourceRequest::List { .. } => Self::List,
            ResourceRequest::Update { .. } => Self::Update,
            ResourceRequest::Delete { .. } => Self::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Goal, GoalCreate, GoalId, IdentityId};
    use uuid::Uuid;

    fn goal(text: &str) -> Goal {
        Goal::from_create_params(
            GoalId::from(Uuid::new_v4()),
            GoalCreate {
                owner: IdentityId::from(Uuid::new_v4()),
                text: text.to_string(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Goal>::new();
        let stored = goal("Read a book");
        mock.expect_create().return_ok(stored.clone());
        mock.expect_get(stored.id.clone())
            .return_ok(Some(stored.clone()));
        mock.expect_delete(stored.id.clone())
            .return_err(FrameworkError::NotFound(stored.id.to_string()));

        let client = mock.client();
        let created = client
            .create(GoalCreate {
                owner: stored.owner.clone(),
                text: "Read a book".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created, stored);

        let fetched = client.get(stored.id.clone()).await.unwrap();
        assert_eq!(fetched, Some(stored.clone()));

        let deleted = client.delete(stored.id.clone()).await;
        assert!(matches!(deleted, Err(FrameworkError::NotFound(_))));

        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_drops_response() {
        let mock = MockClient::<Goal>::new();
        let result = mock.client().list(Default::default()).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
