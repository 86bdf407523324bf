//! Request DTOs for the demo API
//!
//! Defines the query parameters accepted by the demo endpoints.

use serde::Deserialize;

/// Upper bound on `chunks * chunk_size` for the streaming endpoint
pub const MAX_STREAM_BYTES: usize = 16 * 1024 * 1024;

/// Query parameters for GET /demo/stream
///
/// # Fields
/// - `chunks`: Number of chunks to emit
/// - `chunk_size`: Size of each chunk in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StreamParams {
    #[serde(default = "default_chunks")]
    pub chunks: usize,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunks() -> usize {
    4
}

fn default_chunk_size() -> usize {
    16
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            chunks: default_chunks(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl StreamParams {
    /// Validates the parameters
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.chunk_size == 0 {
            return Some("chunk_size must be positive".to_string());
        }
        match self.chunks.checked_mul(self.chunk_size) {
            Some(total) if total <= MAX_STREAM_BYTES => None,
            _ => Some(format!(
                "stream size exceeds maximum of {} bytes",
                MAX_STREAM_BYTES
            )),
        }
    }

    /// Total number of bytes the stream will emit
    pub fn total_bytes(&self) -> usize {
        self.chunks * self.chunk_size
    }
}
