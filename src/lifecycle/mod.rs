//! Runtime orchestration and lifecycle management.
//!
//! - [`GoalSystem`] - starts the actors, wires the services, shuts everything down
//! - [`setup_tracing`] - installs the log subscriber

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::*;
