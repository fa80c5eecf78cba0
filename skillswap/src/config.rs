use serde::Deserialize;
use std::env;

use crate::feed::{AdvancePolicy, DEFAULT_SWIPE_THRESHOLD};

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse a comma-separated list, dropping blank entries.
fn parse_env_list(var: &str) -> Vec<String> {
    env::var(var)
        .map(|val| {
            val.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_keys: Vec<String>,
}

/// Where the SkillSwap REST backend lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Horizontal drag distance (logical pixels) a gesture must exceed to count as a swipe.
    pub swipe_threshold: f64,
    /// Radius applied when a client enables location filtering without choosing one.
    pub default_max_distance_km: f64,
    pub advance_policy: AdvancePolicy,
    pub resolve_avatars: bool,
    pub session_capacity: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            default_max_distance_km: 50.0,
            advance_policy: AdvancePolicy::RemoveAndReset,
            resolve_avatars: true,
            session_capacity: 1024,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let backend = BackendConfig::default();
        let feed = FeedConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("SKILLSWAP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("SKILLSWAP_PORT", 3000),
                api_keys: parse_env_list("SKILLSWAP_API_KEYS"),
            },
            backend: BackendConfig {
                base_url: env::var("BACKEND_URL").unwrap_or(backend.base_url),
                timeout_secs: parse_env_or("BACKEND_TIMEOUT", backend.timeout_secs),
            },
            feed: FeedConfig {
                swipe_threshold: parse_env_or("FEED_SWIPE_THRESHOLD", feed.swipe_threshold),
                default_max_distance_km: match parse_env_or(
                    "FEED_DEFAULT_MAX_DISTANCE_KM",
                    feed.default_max_distance_km,
                ) {
                    km if km.is_finite() && km >= 0.0 => km,
                    km => {
                        tracing::warn!(
                            "FEED_DEFAULT_MAX_DISTANCE_KM must be a finite, non-negative number, got {}. Using default.",
                            km
                        );
                        feed.default_max_distance_km
                    }
                },
                advance_policy: parse_env_or("FEED_ADVANCE_POLICY", feed.advance_policy),
                resolve_avatars: parse_env_or("FEED_RESOLVE_AVATARS", feed.resolve_avatars),
                session_capacity: match parse_env_or(
                    "FEED_SESSION_CAPACITY",
                    feed.session_capacity,
                ) {
                    0 => {
                        tracing::warn!("FEED_SESSION_CAPACITY must be non-zero. Using default.");
                        feed.session_capacity
                    }
                    n => n,
                },
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
