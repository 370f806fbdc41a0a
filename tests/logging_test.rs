use goal_tracker::config::AppConfig;
use goal_tracker::lifecycle::GoalSystem;
use goal_tracker::model::GoalDraft;
use goal_tracker::registration::{LoginRequest, RegisterRequest};
use goal_tracker::store::ResourceStore;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::Level;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Secrets never reach the logs, even at trace level.
///
/// The default `current_thread` runtime runs the actor tasks on this thread, so the
/// thread-local subscriber sees their events too.
#[tokio::test]
async fn test_tokens_and_passwords_stay_out_of_logs() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let system = GoalSystem::new(&AppConfig {
        bcrypt_cost: 4,
        ..AppConfig::default()
    });
    let password = "correct horse battery";
    system
        .registration
        .register(RegisterRequest::new("Ann", "ann@example.com", password))
        .await
        .unwrap();
    let session = system
        .registration
        .login(LoginRequest::new("ann@example.com", password))
        .await
        .unwrap();
    system.registration.me(&session.token).await.unwrap();

    let store = ResourceStore::new(system.transport());
    store.create(&session, GoalDraft::new("Run 5k")).await;
    store.list_all(&session).await;

    system.registration.logout(&session.token).await.unwrap();
    drop(store);
    system.shutdown().await.unwrap();

    let output = logs.contents();
    assert!(output.contains("entity_type=\"Session\""), "nothing captured:\n{output}");
    assert!(output.contains("Deleted"));
    assert!(!output.contains(&session.token), "token leaked:\n{output}");
    assert!(!output.contains(password), "password leaked:\n{output}");
}
