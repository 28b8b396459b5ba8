use crate::{AppState, RequestContext, RpcError};

use hr_auth::AuthOutcome;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::{debug, error, warn};

/// Route layer running the [`hr_auth::AuthInterceptor`] before the handler.
///
/// A rejected call never reaches the handler. Only the rejection reason and
/// stage are logged, never the credential.
pub async fn authenticate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let prefix = request
        .extensions()
        .get::<RequestContext>()
        .map(RequestContext::log_prefix)
        .unwrap_or_else(|| format!("[proc={}]", request.uri().path()));

    let outcome = state.interceptor.intercept(&mut request).await;
    match outcome {
        Ok(AuthOutcome::Public) => {
            debug!("{prefix} public procedure");
            next.run(request).await
        }
        Ok(AuthOutcome::Authenticated { user_id }) => {
            debug!("{prefix} authenticated as user {user_id}");
            next.run(request).await
        }
        Err(e) => {
            let stage = e.stage().map(|s| s.as_str()).unwrap_or("unknown");
            if e.is_unauthenticated() {
                warn!("{prefix} rejected at {stage}: {}", e.reason());
                state.metrics.auth_rejected(e.reason());
            } else {
                error!("{prefix} authentication failed at {stage}: {e}");
            }
            RpcError::from(e).into_response()
        }
    }
}
