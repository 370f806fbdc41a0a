use goal_tracker::clients::session_client::DEFAULT_SESSION_TTL;
use goal_tracker::clients::{IdentityClient, SessionClient};
use goal_tracker::framework::mock::MockClient;
use goal_tracker::framework::FrameworkError;
use goal_tracker::model::{Identity, IdentityId, Session};
use goal_tracker::registration::{RegisterRequest, RegistrationError, RegistrationService};
use uuid::Uuid;

/// Registration service over a mocked identity store.
///
/// The mock answers the repository's `list` (lookup by email) and `create` requests, so
/// these tests pin down exactly which datastore calls each path makes.
struct Harness {
    identities: MockClient<Identity>,
    sessions: MockClient<Session>,
    service: RegistrationService<IdentityClient>,
}

impl Harness {
    fn new() -> Self {
        let identities = MockClient::<Identity>::new();
        let sessions = MockClient::<Session>::new();
        let service = RegistrationService::new(
            IdentityClient::new(identities.client()),
            SessionClient::new(sessions.client(), DEFAULT_SESSION_TTL),
            4,
        );
        Self {
            identities,
            sessions,
            service,
        }
    }

    fn verify(&self) {
        self.identities.verify();
        self.sessions.verify();
    }
}

fn stored(name: &str, email: &str) -> Identity {
    Identity {
        id: IdentityId::from(Uuid::new_v4()),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$abcdefghijklmnopqrstuuK1n0cR9bZ5cJxwZ2k0u2dPq8mQ7bXyS".to_string(),
    }
}

#[tokio::test]
async fn test_empty_fields_never_touch_the_datastore() {
    let harness = Harness::new();

    for (request, field) in [
        (RegisterRequest::new("", "ann@example.com", "pw"), "name"),
        (RegisterRequest::new("Ann", "   ", "pw"), "email"),
        (RegisterRequest::new("Ann", "ann@example.com", ""), "password"),
    ] {
        let err = harness.service.register(request).await.unwrap_err();
        assert_eq!(err, RegistrationError::Validation(field.to_string()));
        assert_eq!(err.status_hint(), 400);
    }

    // No expectations were set, so any datastore call would have failed the test
    harness.verify();
}

#[tokio::test]
async fn test_existing_email_conflicts_without_insert() {
    let mut harness = Harness::new();
    harness
        .identities
        .expect_list()
        .return_ok(vec![stored("Ann", "ann@example.com")]);

    let err = harness
        .service
        .register(RegisterRequest::new("Ann", "ann@example.com", "pw"))
        .await
        .unwrap_err();

    assert_eq!(err, RegistrationError::Conflict);
    assert_eq!(err.body().message.as_deref(), Some("email already exists"));
    harness.verify();
}

#[tokio::test]
async fn test_lost_insert_race_is_a_conflict() {
    let mut harness = Harness::new();
    harness.identities.expect_list().return_ok(vec![]);
    harness
        .identities
        .expect_create()
        .return_err(FrameworkError::Conflict("ann@example.com".to_string()));

    let err = harness
        .service
        .register(RegisterRequest::new("Ann", "ann@example.com", "pw"))
        .await
        .unwrap_err();

    assert_eq!(err, RegistrationError::Conflict);
    harness.verify();
}

#[tokio::test]
async fn test_store_failure_is_a_persistence_error() {
    let mut harness = Harness::new();
    harness.identities.expect_list().return_ok(vec![]);
    harness
        .identities
        .expect_create()
        .return_err(FrameworkError::ActorClosed);

    let err = harness
        .service
        .register(RegisterRequest::new("Ann", "ann@example.com", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Persistence(_)));
    assert_eq!(err.status_hint(), 500);
    harness.verify();
}

#[tokio::test]
async fn test_success_returns_only_public_fields() {
    let mut harness = Harness::new();
    let record = stored("Ann", "ann@example.com");
    harness.identities.expect_list().return_ok(vec![]);
    harness.identities.expect_create().return_ok(record.clone());

    let identity = harness
        .service
        .register(RegisterRequest::new("Ann", "ann@example.com", "pw"))
        .await
        .unwrap();

    assert_eq!(identity.id, record.id);
    let json = serde_json::to_string(&identity).unwrap();
    assert!(!json.contains(&record.password_hash));
    assert!(!json.contains("password"));
    assert!(!format!("{record:?}").contains(&record.password_hash));
    harness.verify();
}
