//! Cached Response Module
//!
//! Defines the stored form of a response and how it is replayed.

use axum::{
    body::{Body, Bytes},
    http::{
        header::CONTENT_TYPE, response::Parts, HeaderMap, HeaderName, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

// == Cached Response ==
/// A fully buffered 2xx response as stored in a cache backend.
///
/// Entries are immutable: an overwrite replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    /// HTTP status code
    pub status: u16,
    /// Header name/value pairs in response order
    pub headers: Vec<(String, Vec<u8>)>,
    /// Value of the `content-type` header, if any
    pub media_type: Option<String>,
    /// Complete response body
    pub body: Bytes,
    /// TTL in seconds the entry was stored with
    pub ttl: u64,
}

impl CachedResponse {
    // == Constructor ==
    /// Builds an entry from response head parts and a buffered body.
    pub fn from_parts(parts: &Parts, body: Bytes, ttl: u64) -> Self {
        let headers = parts
            .headers
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
            .collect();

        let media_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Self {
            status: parts.status.as_u16(),
            headers,
            media_type,
            body,
            ttl,
        }
    }

    /// Size of the stored body in bytes.
    pub fn size(&self) -> usize {
        self.body.len()
    }
}

// == Replay ==
impl IntoResponse for CachedResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_bytes(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.append(name, value);
                }
                _ => debug!(header = %name, "dropping invalid cached header"),
            }
        }

        if !headers.contains_key(CONTENT_TYPE) {
            if let Some(value) = self
                .media_type
                .as_deref()
                .and_then(|media_type| HeaderValue::from_str(media_type).ok())
            {
                headers.insert(CONTENT_TYPE, value);
            }
        }

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parts() -> Parts {
        let response = axum::http::Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "application/json")
            .header("x-request-source", "handler")
            .header("set-cookie", "a=1")
            .header("set-cookie", "b=2")
            .body(())
            .unwrap();
        response.into_parts().0
    }

    #[test]
    fn test_from_parts_copies_head() {
        let entry = CachedResponse::from_parts(&sample_parts(), Bytes::from("{}"), 60);

        assert_eq!(entry.status, 200);
        assert_eq!(entry.media_type.as_deref(), Some("application/json"));
        assert_eq!(entry.ttl, 60);
        assert_eq!(entry.size(), 2);
        assert_eq!(
            entry.headers.iter().filter(|(name, _)| name == "set-cookie").count(),
            2
        );
    }

    #[tokio::test]
    async fn test_replay_restores_response() {
        let entry = CachedResponse::from_parts(&sample_parts(), Bytes::from(r#"{"count":1}"#), 60);

        let response = entry.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["x-request-source"], "handler");
        assert_eq!(response.headers().get_all("set-cookie").iter().count(), 2);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"count":1}"#);
    }

    #[test]
    fn test_replay_uses_media_type_when_header_missing() {
        let entry = CachedResponse {
            status: 201,
            headers: Vec::new(),
            media_type: Some("text/plain".to_string()),
            body: Bytes::from("created"),
            ttl: 10,
        };

        let response = entry.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()["content-type"], "text/plain");
    }

    #[test]
    fn test_replay_header_names_are_case_insensitive() {
        let entry = CachedResponse {
            status: 200,
            headers: vec![("X-Custom".to_string(), b"yes".to_vec())],
            media_type: None,
            body: Bytes::new(),
            ttl: 10,
        };

        let response = entry.into_response();
        assert_eq!(response.headers()["x-custom"], "yes");
    }

    #[test]
    fn test_replay_skips_invalid_headers() {
        let entry = CachedResponse {
            status: 200,
            headers: vec![
                ("bad header".to_string(), b"x".to_vec()),
                ("x-ok".to_string(), b"1".to_vec()),
            ],
            media_type: None,
            body: Bytes::new(),
            ttl: 10,
        };

        let response = entry.into_response();
        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.headers()["x-ok"], "1");
    }
}
