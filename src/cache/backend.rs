//! Cache Backend Module
//!
//! The capability a key-value store must offer to back the response cache.

use async_trait::async_trait;

use crate::cache::{CacheKey, CachedResponse};
use crate::error::Result;

/// An async key-value store with per-entry TTL.
///
/// Expiry, eviction and cross-process visibility are the backend's own
/// business. A `ttl` of zero stores the entry without expiry.
#[async_trait]
pub trait CacheBackend: Send + Sync + 'static {
    /// Returns the live entry for `key`, if any.
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedResponse>>;

    /// Stores `entry` under `key`, replacing any previous entry.
    async fn set(&self, key: &CacheKey, entry: CachedResponse, ttl: u64) -> Result<()>;
}

