//! Server-side request handling that sits behind the HTTP glue.
//!
//! - [`GoalApi`] - goal CRUD for the session's owner

pub mod goals;

pub use goals::GoalApi;
