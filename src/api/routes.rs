//! API Routes
//!
//! Configures the Axum router with the demo endpoints and the response cache.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    counter_by_id_handler, counter_handler, health_handler, stats_handler, stream_handler,
    AppState,
};
use crate::cache::response_cache_layer;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET|POST /demo/counter` - Shared counter
/// - `GET /demo/counter/:id` - Shared counter tagged with a path id
/// - `GET /demo/stream` - Chunked body of configurable size
/// - `GET /stats` - Cache and store statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Response cache: Applied to every route, only configured masks are cached
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cache = middleware::from_fn_with_state(state.dispatcher.clone(), response_cache_layer);

    Router::new()
        .route("/demo/counter", get(counter_handler).post(counter_handler))
        .route("/demo/counter/:id", get(counter_by_id_handler))
        .route("/demo/stream", get(stream_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cache)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
