//! Runtime configuration from environment variables.

use crate::clients::session_client::DEFAULT_SESSION_TTL;
use crate::registration::DEFAULT_BCRYPT_COST;
use std::env;
use std::time::Duration;
use tracing::warn;

/// Settings for [`GoalSystem`](crate::lifecycle::GoalSystem) and the log filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// bcrypt work factor for new password hashes (4..=31)
    pub bcrypt_cost: u32,

    /// Request queue depth of each actor
    pub channel_buffer: usize,

    /// How long a login stays valid
    pub session_ttl: Duration,

    /// `EnvFilter` directive, e.g. `info` or `goal_tracker=debug`
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            channel_buffer: 32,
            session_ttl: DEFAULT_SESSION_TTL,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GOALS_BCRYPT_COST`: bcrypt cost (default: 10)
    /// - `GOALS_CHANNEL_BUFFER`: actor queue depth (default: 32)
    /// - `GOALS_SESSION_TTL_SECS`: session lifetime in seconds (default: 30 days)
    /// - `GOALS_LOG` or `RUST_LOG`: log filter (default: info)
    ///
    /// Unparseable or out-of-range numbers fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bcrypt_cost: parse_or(&lookup, "GOALS_BCRYPT_COST", defaults.bcrypt_cost)
                .filter(|cost| (4..=31).contains(cost))
                .unwrap_or(defaults.bcrypt_cost),

            channel_buffer: parse_or(&lookup, "GOALS_CHANNEL_BUFFER", defaults.channel_buffer)
                .filter(|buffer| *buffer > 0)
                .unwrap_or(defaults.channel_buffer),

            session_ttl: parse_or(
                &lookup,
                "GOALS_SESSION_TTL_SECS",
                defaults.session_ttl.as_secs(),
            )
            .filter(|secs| *secs > 0)
            .map_or(defaults.session_ttl, Duration::from_secs),

            log_filter: lookup("GOALS_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Option<T> {
    match lookup(key) {
        None => Some(default),
        Some(raw) => {
            let parsed = raw.trim().parse().ok();
            if parsed.is_none() {
                warn!(key, value = %raw, "Ignoring unparseable setting");
            }
            parsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bcrypt_cost, 10);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("GOALS_BCRYPT_COST", "12"),
            ("GOALS_CHANNEL_BUFFER", "64"),
            ("GOALS_SESSION_TTL_SECS", "3600"),
            ("GOALS_LOG", "goal_tracker=trace"),
            ("RUST_LOG", "warn"),
        ]);
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.channel_buffer, 64);
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert_eq!(config.log_filter, "goal_tracker=trace");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = load(&[
            ("GOALS_BCRYPT_COST", "ten"),
            ("GOALS_CHANNEL_BUFFER", "0"),
            ("RUST_LOG", "debug"),
        ]);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.log_filter, "debug");

        assert_eq!(load(&[("GOALS_BCRYPT_COST", "40")]).bcrypt_cost, 10);
    }
}
