//! Error types for the response cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by cache backends.
///
/// These never reach a client: `CacheGateway` turns them into a miss or a
/// skipped write.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend could not be reached or refused the operation
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// Backend failed while handling the operation
    #[error("Cache backend error: {0}")]
    Backend(String),
}

// == Config Error Enum ==
/// Errors raised while building the cache configuration.
///
/// Fatal at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path mask could not be compiled
    #[error("Malformed path mask '{mask}': {reason}")]
    MalformedMask { mask: String, reason: &'static str },

    /// Cached endpoint entry could not be parsed
    #[error("Invalid cached endpoint: {0}")]
    InvalidEndpoint(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache backends.
pub type Result<T> = std::result::Result<T, CacheError>;
