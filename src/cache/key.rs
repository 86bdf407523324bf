//! Cache Key Module

use std::fmt;

use serde::{Deserialize, Serialize};

// == Cache Key ==
/// Identifies a cached response by path and raw query string.
///
/// The query string is used exactly as received: `?a=1&b=2` and `?b=2&a=1`
/// are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds `path + "?" + query`.
    pub fn build(path: &str, query: &str) -> Self {
        let mut key = String::with_capacity(path.len() + query.len() + 1);
        key.push_str(path);
        key.push('?');
        key.push_str(query);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
