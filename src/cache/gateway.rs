//! Cache Gateway Module
//!
//! Failure boundary around a `CacheBackend`. Backend errors are logged and
//! turned into "no cached value" or "write skipped"; they never reach the
//! caller.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{CacheBackend, CacheKey, CachedResponse, GatewayStats, StatsSnapshot};

// == Cache Gateway ==
/// Infallible get/set over an injected backend.
///
/// Cheap to clone; clones share the backend and the counters.
#[derive(Clone)]
pub struct CacheGateway {
    backend: Arc<dyn CacheBackend>,
    stats: Arc<GatewayStats>,
}

impl CacheGateway {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend,
            stats: Arc::new(GatewayStats::new()),
        }
    }

    // == Get ==
    /// Looks up `key`. Read failures are reported as a miss.
    pub async fn get(&self, key: &CacheKey) -> Option<CachedResponse> {
        match self.backend.get(key).await {
            Ok(Some(entry)) => {
                self.stats.record_hit();
                Some(entry)
            }
            Ok(None) => {
                self.stats.record_miss();
                None
            }
            Err(err) => {
                warn!(key = %key, error = %err, "Cache read error");
                self.stats.record_read_error();
                None
            }
        }
    }

    // == Set ==
    /// Stores `entry` under `key` for `ttl` seconds.
    ///
    /// Returns `false` when the backend rejected the write.
    pub async fn set(&self, key: &CacheKey, entry: CachedResponse, ttl: u64) -> bool {
        match self.backend.set(key, entry, ttl).await {
            Ok(()) => {
                debug!(key = %key, ttl, "Request saved");
                self.stats.record_write();
                true
            }
            Err(err) => {
                warn!(key = %key, error = %err, "Cache write error");
                self.stats.record_write_error();
                false
            }
        }
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
