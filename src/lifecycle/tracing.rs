//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the whole
//! system. Module paths are hidden (`with_target(false)`); actor log lines carry an
//! `entity_type` field instead, and store lines an `operation` span.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! GOALS_LOG=info cargo run
//!
//! # Request payloads and per-request ids
//! GOALS_LOG=debug cargo run
//!
//! # Only the store
//! GOALS_LOG=goal_tracker::store=debug cargo run
//! ```
//!
//! ## What a registration and one goal look like
//!
//! **With `info`**:
//!
//! ```text
//! INFO register: Created entity_type="Identity" size=1
//! INFO register: Registered identity identity_id=8f0c...
//! INFO login: Opened session identity_id=8f0c...
//! INFO create:create_item:create: Goal created goal_id=41d2... owner=8f0c...
//! INFO create: Created request_id=1 item_id=41d2...
//! ```
//!
//! **With `debug`** each request also logs its payload once, e.g.
//! `DEBUG create: Dispatching request_id=1 data=GoalDraft { text: "Run 5k" }`.
//! Password hashes never appear: the identity types redact them in `Debug`.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `filter` is an `EnvFilter` directive; an invalid one
/// falls back to `info`.
pub fn setup_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type / operation fields replace module paths
        .compact()
        .init();
}
