//! API Handlers
//!
//! HTTP request handlers for the health, stats and demo endpoints.

use std::convert::Infallible;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::stream;

use crate::cache::CacheDispatcher;
use crate::config::Config;
use crate::error::ConfigError;
use crate::models::{CounterResponse, ErrorResponse, HealthResponse, StatsResponse, StreamParams};
use crate::store::MemoryStore;

/// Application state shared across all handlers.
///
/// The dispatcher and the stats handler share one in-memory store.
#[derive(Clone)]
pub struct AppState {
    /// In-memory backend behind the dispatcher
    pub store: Arc<MemoryStore>,
    /// Response cache applied to the demo routes
    pub dispatcher: CacheDispatcher,
    /// Incremented on every counter handler invocation
    pub counter: Arc<AtomicU64>,
}

impl AppState {
    /// Creates a new AppState around an existing store and dispatcher.
    pub fn new(store: Arc<MemoryStore>, dispatcher: CacheDispatcher) -> Self {
        Self {
            store,
            dispatcher,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Compiles the cached endpoints; a malformed mask is an error.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let store = Arc::new(MemoryStore::new(config.max_entries));
        let dispatcher = CacheDispatcher::from_endpoints(
            config.cached_endpoints.iter().map(|(mask, ttl)| (mask.as_str(), *ttl)),
            store.clone(),
            config.max_content_size,
        )?;
        Ok(Self::new(store, dispatcher))
    }

    fn next_count(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Handler for GET|POST /demo/counter
pub async fn counter_handler(State(state): State<AppState>) -> Json<CounterResponse> {
    Json(CounterResponse::new(state.next_count()))
}

/// Handler for GET /demo/counter/:id
pub async fn counter_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<CounterResponse> {
    Json(CounterResponse::with_id(state.next_count(), id))
}

/// Handler for GET /demo/stream
///
/// Streams `chunks` chunks of `chunk_size` bytes without a content length,
/// so the body size is only known once it has been read.
pub async fn stream_handler(
    Query(params): Query<StreamParams>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    if let Some(error_msg) = params.validate() {
        return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error_msg))));
    }

    let chunk_size = params.chunk_size;
    let chunks = (0..params.chunks).map(move |i| {
        let fill = b'a' + (i % 26) as u8;
        Ok::<_, Infallible>(Bytes::from(vec![fill; chunk_size]))
    });

    Ok((
        [(header::CONTENT_TYPE, "text/plain")],
        Body::from_stream(stream::iter(chunks)),
    )
        .into_response())
}

/// Handler for GET /stats
///
/// Returns gateway counters and in-memory store counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        cache: state.dispatcher.gateway().stats(),
        store: state.store.stats().await,
    })
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_counter_handler_increments() {
        let state = test_state();

        let first = counter_handler(State(state.clone())).await;
        let second = counter_handler(State(state)).await;

        assert_eq!(first.count, 1);
        assert_eq!(second.count, 2);
    }

    #[tokio::test]
    async fn test_counter_by_id_handler() {
        let state = test_state();

        let response = counter_by_id_handler(State(state), Path("42".to_string())).await;
        assert_eq!(response.0, CounterResponse::with_id(1, "42"));
    }

    #[tokio::test]
    async fn test_stream_handler_body() {
        let params = StreamParams {
            chunks: 3,
            chunk_size: 4,
        };

        let Ok(response) = stream_handler(Query(params)).await else {
            panic!("Valid params should stream");
        };
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        assert_eq!(&body[..], b"aaaabbbbcccc");
    }

    #[tokio::test]
    async fn test_stream_handler_rejects_invalid_params() {
        let params = StreamParams {
            chunks: 3,
            chunk_size: 0,
        };

        match stream_handler(Query(params)).await {
            Err((status, _)) => assert_eq!(status, StatusCode::BAD_REQUEST),
            Ok(_) => panic!("Zero chunk size should be rejected"),
        }
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.cache.hits, 0);
        assert_eq!(response.store.entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_from_config_rejects_malformed_mask() {
        let config = Config {
            cached_endpoints: vec![("/broken/{id".to_string(), 60)],
            ..Config::default()
        };

        assert!(matches!(
            AppState::from_config(&config),
            Err(ConfigError::MalformedMask { .. })
        ));
    }
}
