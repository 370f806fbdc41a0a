//! # Goal Tracker
//!
//! > **Accounts, sessions and a per-user list of goals, on resource-oriented actors.**
//!
//! The crate has two halves:
//!
//! - **Backend**: [`registration::RegistrationService`] registers accounts (bcrypt-hashed
//!   passwords, unique emails) and issues bearer-token sessions; [`api::GoalApi`] serves
//!   goal CRUD scoped to the session's owner.
//! - **Client store**: [`store::ResourceStore`] dispatches create, list and delete requests
//!   through a transport and tracks each lifecycle in observable state (`is_loading`,
//!   `is_success`, `is_error`, `message`, plus a status per operation).
//!
//! ## Core Concepts
//!
//! ### Resource Actors
//! Identities, sessions and goals each live in a `ResourceActor<T: ActorEntity>`: one Tokio
//! task owning one map, fed by an `mpsc` channel. Requests are handled one at a time, so
//! the maps need no locks, and uniqueness checks (one account per email) cannot race.
//!
//! ### Typed Errors
//! Each actor defines its own error type (`IdentityError`, `SessionError`, `GoalError`);
//! clients map `FrameworkError` into it. Service errors carry an HTTP status hint and
//! render to a `{ "message": ... }` body.
//!
//! ### Explicit Sessions
//! Store operations take the caller's [`SessionContext`](store::SessionContext) as an
//! argument. A missing token rejects the operation before any transport call.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`, its `ResourceClient<T>`, the `ActorClient` trait and
//! the `MockClient` test double.
//!
//! ### 2. The Actors ([`identity_actor`], [`session_actor`], [`goal_actor`])
//! `ActorEntity` implementations for the [`model`] types.
//!
//! ### 3. The Interface ([`clients`])
//! Domain wrappers over `ResourceClient`, including the
//! [`IdentityRepository`](registration::IdentityRepository) implementation and the
//! in-process store transport.
//!
//! ### 4. The Services ([`registration`], [`api`], [`store`])
//! What callers actually use.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`GoalSystem`](lifecycle::GoalSystem) spins up the actors and wires the services;
//! [`AppConfig`](config::AppConfig) reads settings from the environment.
//!
//! ## Running the Demo
//!
//! ```bash
//! GOALS_LOG=info cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod framework;
pub mod goal_actor;
pub mod identity_actor;
pub mod lifecycle;
pub mod model;
pub mod registration;
pub mod session_actor;
pub mod store;
