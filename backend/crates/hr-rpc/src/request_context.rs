use crate::procedures::method_name;

use std::convert::Infallible;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use http::HeaderMap;
use http::request::Parts;
use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Header carrying a caller-supplied correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LENGTH: usize = 128;

/// Per-call context for log correlation and latency
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub correlation_id: String,
    /// Sequence number within this server instance
    pub request_seq: u64,
    pub procedure: String,
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(procedure: &str, request_id: Option<&str>) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        let correlation_id = match request_id {
            Some(id) if is_acceptable_request_id(id) => id.to_string(),
            _ => format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple()),
        };

        Self {
            correlation_id,
            request_seq,
            procedure: procedure.to_string(),
            started_at: Instant::now(),
        }
    }

    pub fn from_headers(procedure: &str, headers: &HeaderMap) -> Self {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        Self::new(procedure, request_id)
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Create a log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        let short_id: String = self.correlation_id.chars().take(12).collect();
        format!(
            "[req={} proc={}]",
            short_id,
            method_name(&self.procedure)
        )
    }
}

fn is_acceptable_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LENGTH
        && id.bytes().all(|b| b.is_ascii_graphic())
}

/// Handlers receive the context installed by the tracking middleware, or a
/// fresh one when mounted without it.
impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| RequestContext::from_headers(parts.uri.path(), &parts.headers)))
    }
}
