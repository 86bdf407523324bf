//! Response DTOs for the demo API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::StatsSnapshot;
use crate::store::StoreStats;

/// Response body for the counter endpoints (GET|POST /demo/counter[/:id])
///
/// `count` goes up once per handler invocation, so an unchanged value
/// across requests means the response came from the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterResponse {
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CounterResponse {
    pub fn new(count: u64) -> Self {
        Self { count, id: None }
    }

    pub fn with_id(count: u64, id: impl Into<String>) -> Self {
        Self {
            count,
            id: Some(id.into()),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Gateway counters
    pub cache: StatsSnapshot,
    /// In-memory store counters
    pub store: StoreStats,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for rejected demo requests
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
