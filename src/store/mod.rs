//! Store Module
//!
//! Bundled in-memory backend for the response cache.

mod entry;
mod memory;

pub use entry::StoredEntry;
pub use memory::{MemoryStore, StoreStats};
