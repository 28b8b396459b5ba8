use crate::{AppState, Code, REQUEST_ID_HEADER, RequestContext};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderValue;
use log::{debug, info, warn};

/// Outermost layer: installs the [`RequestContext`], counts the call and its
/// outcome, and echoes the correlation id back.
pub async fn track_request(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let ctx = RequestContext::from_headers(request.uri().path(), request.headers());
    request.extensions_mut().insert(ctx.clone());

    state.metrics.call_received(&ctx.procedure);
    debug!("{} call started", ctx.log_prefix());

    let mut response = next.run(request).await;

    state.metrics.call_latency(ctx.elapsed());
    match response.extensions().get::<Code>().copied() {
        Some(code) => {
            state.metrics.error_occurred(code.as_str());
            match code {
                Code::Internal | Code::DeadlineExceeded => warn!(
                    "{} failed with {} after {}ms",
                    ctx.log_prefix(),
                    code.as_str(),
                    ctx.elapsed_ms()
                ),
                _ => info!(
                    "{} failed with {} after {}ms",
                    ctx.log_prefix(),
                    code.as_str(),
                    ctx.elapsed_ms()
                ),
            }
        }
        None => debug!("{} completed in {}ms", ctx.log_prefix(), ctx.elapsed_ms()),
    }

    if let Ok(value) = HeaderValue::from_str(&ctx.correlation_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
