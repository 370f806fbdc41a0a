use crate::api::GoalApi;
use crate::clients::{IdentityClient, InProcessGoalTransport};
use crate::config::AppConfig;
use crate::registration::RegistrationService;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Starts the identity, session and goal actors and wires the services on top of them.
///
/// # Architecture
///
/// - **Identity actor**: registered accounts, unique by email
/// - **Session actor**: bearer tokens issued at login
/// - **Goal actor**: goals, each tagged with its owner
///
/// [`RegistrationService`] talks to the identity and session actors, [`GoalApi`] to the
/// session and goal actors. [`GoalSystem::transport`] hands a store its in-process transport.
///
/// # Example
///
/// ```ignore
/// let system = GoalSystem::new(&AppConfig::from_env());
/// let user = system.registration.register(request).await?;
/// // ...
/// system.shutdown().await?;
/// ```
pub struct GoalSystem {
    pub registration: RegistrationService<IdentityClient>,
    pub goals: GoalApi,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl GoalSystem {
    /// Spawns the actors and returns the wired system. Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let buffer = config.channel_buffer;

        // No actor depends on another (Context = ())
        let (identity_actor, identity_client) = crate::identity_actor::new(buffer);
        let (session_actor, session_client) = crate::session_actor::new(buffer, config.session_ttl);
        let (goal_actor, goal_client) = crate::goal_actor::new(buffer);

        let handles = vec![
            tokio::spawn(identity_actor.run(())),
            tokio::spawn(session_actor.run(())),
            tokio::spawn(goal_actor.run(())),
        ];

        info!(bcrypt_cost = config.bcrypt_cost, buffer, "Goal system started");
        Self {
            registration: RegistrationService::new(
                identity_client,
                session_client.clone(),
                config.bcrypt_cost,
            ),
            goals: GoalApi::new(goal_client, session_client),
            handles,
        }
    }

    /// A transport for a [`ResourceStore`](crate::store::ResourceStore) backed by this system.
    ///
    /// Stores hold client handles: drop them before calling [`shutdown`](Self::shutdown).
    pub fn transport(&self) -> InProcessGoalTransport {
        InProcessGoalTransport::new(self.goals.clone())
    }

    /// Drops the system's clients and waits for every actor to drain its queue and exit.
    ///
    /// An actor exits once every client handle is gone, so outstanding clones (stores,
    /// transports) keep this waiting.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.registration);
        drop(self.goals);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
