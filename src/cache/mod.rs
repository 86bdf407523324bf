//! Cache Module
//!
//! Selective response caching for GET endpoints.
//!
//! A `CacheDispatcher` checks each request against the compiled
//! `RuleSet`, looks it up through the `CacheGateway` and stores eligible
//! 2xx responses after `capture` has buffered them.

mod backend;
mod capture;
mod dispatcher;
mod entry;
mod gateway;
mod key;
mod pattern;
mod rules;
mod stats;


// Re-export public types
pub use backend::CacheBackend;
pub use capture::{capture, CaptureOutcome};
pub use dispatcher::{response_cache_layer, CacheDispatcher};
pub use entry::CachedResponse;
pub use gateway::CacheGateway;
pub use key::CacheKey;
pub use pattern::PathPattern;
pub use rules::{PathRule, RuleSet};
pub use stats::{GatewayStats, StatsSnapshot};
