//! Cache Dispatcher Module
//!
//! Request interception for the response cache.
//!
//! Only GET requests whose path matches a configured rule are considered.
//! A hit is replayed without invoking the downstream handler; a miss is
//! forwarded, and a 2xx response that fits within `max_content_size` is
//! stored under the TTL of the matched rule. Cache failures never change
//! the response the client gets.

use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument, warn};

use crate::cache::{
    capture, CacheBackend, CacheGateway, CacheKey, CachedResponse, CaptureOutcome, RuleSet,
};
use crate::error::ConfigError;

// == Cache Dispatcher ==
/// Compiled rules plus the gateway, shared by every request.
#[derive(Clone)]
pub struct CacheDispatcher {
    rules: Arc<RuleSet>,
    gateway: CacheGateway,
    max_content_size: usize,
}

impl CacheDispatcher {
    // == Constructor ==
    /// Creates a dispatcher over compiled rules.
    ///
    /// # Arguments
    /// * `rules` - Cacheable endpoints, first match wins
    /// * `backend` - Store for cached responses
    /// * `max_content_size` - Largest body in bytes that will be cached, 0 for no limit
    pub fn new(rules: RuleSet, backend: Arc<dyn CacheBackend>, max_content_size: usize) -> Self {
        debug!(rules = rules.len(), max_content_size, "Cache initialized");
        Self {
            rules: Arc::new(rules),
            gateway: CacheGateway::new(backend),
            max_content_size,
        }
    }

    /// Compiles `(mask, ttl)` pairs and creates a dispatcher.
    pub fn from_endpoints<I, S>(
        endpoints: I,
        backend: Arc<dyn CacheBackend>,
        max_content_size: usize,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        Ok(Self::new(
            RuleSet::compile(endpoints)?,
            backend,
            max_content_size,
        ))
    }

    pub fn gateway(&self) -> &CacheGateway {
        &self.gateway
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    // == Dispatch ==
    /// Runs one request through the cache.
    ///
    /// `next` invokes the rest of the pipeline. Its failures are not
    /// handled here.
    #[instrument(skip_all, fields(method = %request.method(), path = %request.uri().path()))]
    pub async fn dispatch<F, Fut>(&self, request: Request, next: F) -> Response
    where
        F: FnOnce(Request) -> Fut,
        Fut: Future<Output = Response>,
    {
        if request.method() != Method::GET {
            return next(request).await;
        }

        let Some(ttl) = self.rules.match_ttl(request.uri().path()) else {
            return next(request).await;
        };

        let key = CacheKey::build(request.uri().path(), request.uri().query().unwrap_or(""));
        debug!(key = %key, "Request key");

        if let Some(cached) = self.gateway.get(&key).await {
            debug!(key = %key, "Used cached data");
            return cached.into_response();
        }

        let response = next(request).await;

        if !response.status().is_success() {
            debug!(key = %key, status = %response.status(), "Response not cacheable");
            return response;
        }

        self.store(key, ttl, response).await
    }

    /// Captures a successful response, stores it when possible and returns
    /// the response to deliver.
    async fn store(&self, key: CacheKey, ttl: u64, response: Response) -> Response {
        let (parts, body) = response.into_parts();

        match capture(body, self.max_content_size).await {
            CaptureOutcome::Buffered(bytes) => {
                let entry = CachedResponse::from_parts(&parts, bytes.clone(), ttl);
                self.gateway.set(&key, entry, ttl).await;
                Response::from_parts(parts, Body::from(bytes))
            }
            CaptureOutcome::TooLarge(body) => {
                warn!(
                    key = %key,
                    max_content_size = self.max_content_size,
                    "Content size more than limit, not caching"
                );
                Response::from_parts(parts, body)
            }
            CaptureOutcome::Failed(body) => {
                warn!(key = %key, "Response body failed during capture, not caching");
                Response::from_parts(parts, body)
            }
        }
    }
}

// == Middleware ==
/// Axum middleware running requests through a `CacheDispatcher`.
///
/// ```ignore
/// let app = Router::new()
///     .route("/v1/notifications", get(list))
///     .layer(axum::middleware::from_fn_with_state(dispatcher, response_cache_layer));
/// ```
pub async fn response_cache_layer(
    State(dispatcher): State<CacheDispatcher>,
    request: Request,
    next: Next,
) -> Response {
    dispatcher
        .dispatch(request, |request| next.run(request))
        .await
}
