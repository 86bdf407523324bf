//! Memory Store Module
//!
//! In-process `CacheBackend` with per-entry TTL and optional LRU bound.

use std::num::NonZeroUsize;

use async_trait::async_trait;
use lru::LruCache;
use serde::Serialize;
use tokio::sync::Mutex;

use super::StoredEntry;
use crate::cache::{CacheBackend, CacheKey, CachedResponse};
use crate::error::Result;

// == Store Stats ==
/// Entry counts for the in-memory store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Entries currently held, expired ones included until swept
    pub entries: usize,
    /// Entries dropped to stay within capacity
    pub evictions: u64,
    /// Expired entries removed on access or by a sweep
    pub expirations: u64,
}

#[derive(Debug)]
struct Inner {
    entries: LruCache<CacheKey, StoredEntry>,
    evictions: u64,
    expirations: u64,
}

// == Memory Store ==
/// In-memory response store.
///
/// Expired entries are never returned. They are dropped lazily on lookup
/// and eagerly by `purge_expired`.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a store holding at most `max_entries` responses.
    ///
    /// A capacity of zero leaves the store unbounded.
    pub fn new(max_entries: usize) -> Self {
        let entries = match NonZeroUsize::new(max_entries) {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };

        Self {
            inner: Mutex::new(Inner {
                entries,
                evictions: 0,
                expirations: 0,
            }),
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut inner = self.inner.lock().await;
        let now = std::time::Instant::now();

        let expired: Vec<CacheKey> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            inner.entries.pop(key);
        }
        inner.expirations += expired.len() as u64;

        expired.len()
    }

    // == Stats ==
    pub async fn stats(&self) -> StoreStats {
        let inner = self.inner.lock().await;
        StoreStats {
            entries: inner.entries.len(),
            evictions: inner.evictions,
            expirations: inner.expirations,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheBackend for MemoryStore {
    async fn get(&self, key: &CacheKey) -> Result<Option<CachedResponse>> {
        let mut inner = self.inner.lock().await;

        let expired = match inner.entries.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.response.clone())),
            Some(_) => true,
            None => false,
        };

        if expired {
            inner.entries.pop(key);
            inner.expirations += 1;
        }

        Ok(None)
    }

    async fn set(&self, key: &CacheKey, entry: CachedResponse, ttl: u64) -> Result<()> {
        let mut inner = self.inner.lock().await;

        if let Some((evicted, _)) = inner.entries.push(key.clone(), StoredEntry::new(entry, ttl)) {
            if &evicted != key {
                inner.evictions += 1;
            }
        }

        Ok(())
    }
}
