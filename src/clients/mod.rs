//! Domain-specific wrappers around the generic [`ResourceClient`](crate::framework::ResourceClient).

pub mod goal_client;
pub mod goal_transport;
pub mod identity_client;
pub mod session_client;

pub use goal_client::GoalClient;
pub use goal_transport::InProcessGoalTransport;
pub use identity_client::IdentityClient;
pub use session_client::SessionClient;
