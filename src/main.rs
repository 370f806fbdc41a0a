use anyhow::Context;
use goal_tracker::config::AppConfig;
use goal_tracker::lifecycle::{setup_tracing, GoalSystem};
use goal_tracker::model::GoalDraft;
use goal_tracker::registration::{LoginRequest, RegisterRequest};
use goal_tracker::store::{OperationStatus, ResourceStore};
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    setup_tracing(&config.log_filter);

    let system = GoalSystem::new(&config);

    let session = async {
        let user = system
            .registration
            .register(RegisterRequest::new("Ann", "ann@example.com", "correct horse"))
            .await?;
        info!(id = %user.id, email = %user.email, "Registered");

        let duplicate = system
            .registration
            .register(RegisterRequest::new("Ann again", "ANN@example.com", "battery"))
            .await;
        if let Err(e) = duplicate {
            info!(status = e.status_hint(), body = %e.body().to_json(), "Duplicate refused");
        }

        system
            .registration
            .login(LoginRequest::new("ann@example.com", "correct horse"))
            .await
    }
    .instrument(info_span!("registration"))
    .await
    .context("registration flow failed")?;

    let store = ResourceStore::new(system.transport());
    async {
        let first = store.create(&session, GoalDraft::new("Run 5k")).await;
        store.create(&session, GoalDraft::new("Read a book")).await;
        store.list_all(&session).await;

        if let OperationStatus::Fulfilled(goal) = first {
            store.delete(&session, goal.id).await;
        }

        let logged_out: Option<goal_tracker::model::AuthSession> = None;
        store.list_all(&logged_out).await;

        let state = store.snapshot();
        info!(
            items = state.items.len(),
            is_error = state.is_error,
            message = %state.message,
            "Store state"
        );
        store.reset();
    }
    .instrument(info_span!("store"))
    .await;

    system
        .registration
        .logout(&session.token)
        .await
        .context("logout failed")?;

    drop(store);
    system.shutdown().await.context("actor shutdown failed")?;
    Ok(())
}
