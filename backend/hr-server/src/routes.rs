use crate::health;

use hr_rpc::{AppState, build_rpc_router};

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router: probes plus every RPC procedure
pub fn build_router(state: AppState) -> Router {
    let probes = Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state.pool.clone());

    probes
        .merge(build_rpc_router(state))
        // Browser clients call procedures cross-origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
