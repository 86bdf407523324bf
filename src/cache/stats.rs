//! Cache Statistics Module
//!
//! Counts gateway outcomes: hits, misses, failed reads, writes and failed writes.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Gateway Stats ==
/// Lock-free counters shared by every clone of a gateway.
#[derive(Debug, Default)]
pub struct GatewayStats {
    hits: AtomicU64,
    misses: AtomicU64,
    read_errors: AtomicU64,
    writes: AtomicU64,
    write_errors: AtomicU64,
}

impl GatewayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read_error(&self) {
        self.read_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Copies the current counter values.
    pub fn snapshot(&self) -> StatsSnapshot {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let read_errors = self.read_errors.load(Ordering::Relaxed);

        StatsSnapshot {
            hits,
            misses,
            read_errors,
            writes: self.writes.load(Ordering::Relaxed),
            write_errors: self.write_errors.load(Ordering::Relaxed),
            hit_rate: hit_rate(hits, misses + read_errors),
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time view of gateway counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub read_errors: u64,
    pub writes: u64,
    pub write_errors: u64,
    /// hits / lookups, where failed reads count as lookups
    pub hit_rate: f64,
}

fn hit_rate(hits: u64, non_hits: u64) -> f64 {
    let total = hits + non_hits;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let snapshot = GatewayStats::new().snapshot();
        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.misses, 0);
        assert_eq!(snapshot.writes, 0);
        assert_eq!(snapshot.hit_rate, 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = GatewayStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.snapshot().hit_rate, 0.5);
    }

    #[test]
    fn test_read_errors_lower_hit_rate() {
        let stats = GatewayStats::new();
        stats.record_hit();
        stats.record_read_error();
        stats.record_read_error();
        stats.record_miss();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.read_errors, 2);
        assert_eq!(snapshot.hit_rate, 0.25);
    }

    #[test]
    fn test_write_counters() {
        let stats = GatewayStats::new();
        stats.record_write();
        stats.record_write();
        stats.record_write_error();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.writes, 2);
        assert_eq!(snapshot.write_errors, 1);
    }
}
