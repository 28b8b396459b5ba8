use hr_db::ping;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use log::warn;
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health - Component status, including a database round-trip
pub async fn health_check(State(pool): State<SqlitePool>) -> Response {
    let database = match ping(&pool).await {
        Ok(()) => "operational",
        Err(e) => {
            warn!("Health check database ping failed: {e}");
            "unavailable"
        }
    };
    let healthy = database == "operational";

    let health = json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "rpc": "operational",
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe; not ready while the database is unreachable
pub async fn readiness_check(State(pool): State<SqlitePool>) -> Response {
    match ping(&pool).await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
