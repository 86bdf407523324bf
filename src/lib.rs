//! Route Cache - Selective HTTP response caching for axum
//!
//! Caches GET responses for configured path masks with per-rule TTLs,
//! bounded body buffering and failure-isolated cache access.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use cache::{response_cache_layer, CacheBackend, CacheDispatcher};
pub use config::Config;
pub use store::MemoryStore;
pub use tasks::spawn_cleanup_task;
