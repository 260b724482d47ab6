//! Server configuration
//!
//! Read once at startup from the process environment (after `.env` has been
//! loaded). A variable that is missing keeps its default; a variable that is
//! present but unusable also keeps its default and logs a warning.

use move_engine::constants::{DEFAULT_DEPTH, DEFAULT_MAX_TIME_SECS};
use move_engine::SearchBudget;
use std::net::SocketAddr;
use tracing::warn;

pub const BIND_ADDR_VAR: &str = "ENGINE_BIND_ADDR";
pub const DEFAULT_DEPTH_VAR: &str = "ENGINE_DEFAULT_DEPTH";
pub const MAX_TIME_VAR: &str = "ENGINE_MAX_TIME_SECS";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 5000);

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Depth used when a request names neither a depth nor a level
    pub default_depth: u32,
    /// Wall-clock budget of every search, in seconds
    pub max_time_secs: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            default_depth: DEFAULT_DEPTH,
            max_time_secs: DEFAULT_MAX_TIME_SECS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = read_var(&lookup, BIND_ADDR_VAR, defaults.bind_addr, |raw| {
            raw.parse::<SocketAddr>().ok()
        });
        let default_depth = read_var(&lookup, DEFAULT_DEPTH_VAR, defaults.default_depth, |raw| {
            raw.parse::<u32>().ok().filter(|&depth| depth > 0)
        });
        let max_time_secs = read_var(&lookup, MAX_TIME_VAR, defaults.max_time_secs, |raw| {
            raw.parse::<f64>()
                .ok()
                .filter(|&secs| SearchBudget::new(1, secs).is_ok())
        });

        Self {
            bind_addr,
            default_depth,
            max_time_secs,
        }
    }
}

fn read_var<T, L, P>(lookup: &L, name: &str, default: T, parse: P) -> T
where
    T: std::fmt::Debug,
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let Some(raw) = lookup(name) else {
        return default;
    };

    match parse(raw.trim()) {
        Some(value) => value,
        None => {
            warn!(variable = name, value = %raw, fallback = ?default, "Ignoring invalid setting");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(config.default_depth, 3);
        assert_eq!(config.max_time_secs, 1.5);
    }

    #[test]
    fn test_values_are_read() {
        let config = config_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:8080"),
            (DEFAULT_DEPTH_VAR, "4"),
            (MAX_TIME_VAR, " 0.75 "),
        ]);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.default_depth, 4);
        assert_eq!(config.max_time_secs, 0.75);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            (BIND_ADDR_VAR, "localhost"),
            (DEFAULT_DEPTH_VAR, "0"),
            (MAX_TIME_VAR, "-1"),
        ]);
        assert_eq!(config, ServerConfig::default());

        let config = config_from(&[(DEFAULT_DEPTH_VAR, "deep"), (MAX_TIME_VAR, "NaN")]);
        assert_eq!(config.default_depth, 3);
        assert_eq!(config.max_time_secs, 1.5);
    }
}
