use crate::{AppState, RpcError};

use std::panic::Location;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use log::warn;

/// Bound the whole call by the configured handler timeout. On expiry the
/// in-flight future is dropped, including any pending storage call.
pub async fn enforce_deadline(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let timeout = state.handler_timeout;
    let procedure = request.uri().path().to_string();

    match tokio::time::timeout(timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!("{procedure} exceeded its {}ms deadline", timeout.as_millis());
            RpcError::DeadlineExceeded {
                timeout_ms: timeout.as_millis(),
                location: ErrorLocation::from(Location::caller()),
            }
            .into_response()
        }
    }
}
