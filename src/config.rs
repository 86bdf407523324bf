//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::error::ConfigError;

/// Endpoints cached by the demo server when `CACHED_ENDPOINTS` is unset.
pub const DEFAULT_CACHED_ENDPOINTS: &str =
    "/demo/counter=60,/demo/counter/{id}=60,/demo/stream=60";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cacheable path masks and their TTL in seconds, first match wins
    pub cached_endpoints: Vec<(String, u64)>,
    /// Largest response body in bytes that will be cached, 0 = unlimited
    pub max_content_size: usize,
    /// Maximum number of entries the in-memory store can hold, 0 = unbounded
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHED_ENDPOINTS` - `mask=ttl` pairs separated by commas (default: demo endpoints)
    /// - `MAX_CONTENT_SIZE` - Body size cap in bytes (default: 0, unlimited)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    ///
    /// # Errors
    /// A malformed `CACHED_ENDPOINTS` value is an error; other values fall
    /// back to their defaults when they do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cached_endpoints = match env::var("CACHED_ENDPOINTS") {
            Ok(raw) => parse_endpoints(&raw)?,
            Err(_) => defaults.cached_endpoints,
        };

        Ok(Self {
            cached_endpoints,
            max_content_size: parse_var("MAX_CONTENT_SIZE").unwrap_or(defaults.max_content_size),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cached_endpoints: parse_endpoints(DEFAULT_CACHED_ENDPOINTS).unwrap_or_default(),
            max_content_size: 0,
            max_entries: 1000,
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

// == Parse Endpoints ==
/// Parses `mask=ttl` pairs separated by commas, keeping their order.
///
/// Blank items are ignored. Masks are only checked for presence here;
/// they are compiled when the rule set is built.
pub fn parse_endpoints(raw: &str) -> Result<Vec<(String, u64)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let (mask, ttl) = item
                .rsplit_once('=')
                .ok_or_else(|| ConfigError::InvalidEndpoint(format!("missing '=' in '{item}'")))?;
            let mask = mask.trim();
            if mask.is_empty() {
                return Err(ConfigError::InvalidEndpoint(format!("empty mask in '{item}'")));
            }
            let ttl = ttl.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidEndpoint(format!("ttl is not a non-negative integer in '{item}'"))
            })?;
            Ok((mask.to_string(), ttl))
        })
        .collect()
}
