//! Stored Entry Module
//!
//! A cached response together with its expiry deadline.

use std::time::{Duration, Instant};

use crate::cache::CachedResponse;

// == Stored Entry ==
/// A response held by the in-memory store.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// The stored response
    pub response: CachedResponse,
    /// Expiration deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl StoredEntry {
    // == Constructor ==
    /// Creates a new entry that expires after `ttl_seconds`.
    ///
    /// A TTL of zero means the entry never expires.
    pub fn new(response: CachedResponse, ttl_seconds: u64) -> Self {
        let expires_at =
            (ttl_seconds > 0).then(|| Instant::now() + Duration::from_secs(ttl_seconds));

        Self { response, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or None if the entry never expires.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}
