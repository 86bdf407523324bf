//! Response Capture Module
//!
//! Drains a response body into memory so it can be both delivered and
//! cached, bounded by a maximum size.
//!
//! Capture never alters what the client receives: when buffering is
//! abandoned the chunks already read are replayed in front of the rest of
//! the source stream.

use std::fmt;

use axum::body::{Body, BodyDataStream, Bytes, HttpBody};
use bytes::BytesMut;
use futures::{stream, StreamExt};

// == Capture Outcome ==
/// Result of capturing a response body.
pub enum CaptureOutcome {
    /// Whole body buffered within the size limit
    Buffered(Bytes),
    /// Body exceeded the size limit; carries the full body for delivery
    TooLarge(Body),
    /// Body stream failed; carries what was read followed by the error
    Failed(Body),
}

impl fmt::Debug for CaptureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureOutcome::Buffered(bytes) => write!(f, "Buffered({} bytes)", bytes.len()),
            CaptureOutcome::TooLarge(_) => f.write_str("TooLarge"),
            CaptureOutcome::Failed(_) => f.write_str("Failed"),
        }
    }
}

// == Capture ==
/// Buffers `body`, giving up once more than `max_size` bytes have been
/// read. A `max_size` of zero means unlimited.
///
/// Bodies whose exact length is known up front and already exceeds the
/// limit are handed back untouched without reading.
pub async fn capture(body: Body, max_size: usize) -> CaptureOutcome {
    if max_size > 0 {
        if let Some(len) = body.size_hint().exact() {
            if len > max_size as u64 {
                return CaptureOutcome::TooLarge(body);
            }
        }
    }

    let mut rest = body.into_data_stream();
    let mut chunks: Vec<Bytes> = Vec::new();
    let mut buffered = 0usize;

    while let Some(frame) = rest.next().await {
        match frame {
            Ok(chunk) => {
                buffered += chunk.len();
                chunks.push(chunk);
                if max_size > 0 && buffered > max_size {
                    return CaptureOutcome::TooLarge(replay(chunks, rest));
                }
            }
            Err(err) => {
                let head = stream::iter(chunks.into_iter().map(Ok::<_, axum::Error>));
                let failed = head.chain(stream::once(async move { Err(err) }));
                return CaptureOutcome::Failed(Body::from_stream(failed));
            }
        }
    }

    CaptureOutcome::Buffered(concat(chunks, buffered))
}

/// Rebuilds a body from the chunks already read and the unread remainder.
fn replay(chunks: Vec<Bytes>, rest: BodyDataStream) -> Body {
    let head = stream::iter(chunks.into_iter().map(Ok::<_, axum::Error>));
    Body::from_stream(head.chain(rest))
}

fn concat(mut chunks: Vec<Bytes>, len: usize) -> Bytes {
    if chunks.len() == 1 {
        return chunks.pop().unwrap_or_default();
    }

    let mut buf = BytesMut::with_capacity(len);
    for chunk in chunks {
        buf.extend_from_slice(&chunk);
    }
    buf.freeze()
}
