//! API Module
//!
//! HTTP handlers and routing for the demo server.
//!
//! # Endpoints
//! - `GET|POST /demo/counter` - Shared counter, GET is cached
//! - `GET /demo/counter/:id` - Shared counter per id, cached per path
//! - `GET /demo/stream` - Chunked body for exercising the size cap
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
