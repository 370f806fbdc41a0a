//! Plain data types for identities, sessions and goals.

pub mod error_body;
pub mod goal;
pub mod identity;
pub mod session;

pub use error_body::*;
pub use goal::*;
pub use identity::*;
pub use session::*;
