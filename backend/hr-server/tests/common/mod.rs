#![allow(dead_code)]

//! Test infrastructure for hr-server router tests

use hr_config::Config;
use hr_db::{connect_in_memory, run_migrations};
use hr_server::{build_app_state, build_router};

use axum::Router;
use axum::body::{Body, Bytes};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "server-integration-secret-32-bytes!";

/// Create an in-memory SQLite pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Full application router over a fresh database
pub async fn create_test_router() -> (Router, SqlitePool) {
    let pool = create_test_pool().await;
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());

    let state = build_app_state(&config, pool.clone()).expect("Failed to build state");
    (build_router(state), pool)
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    (status, body)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request")
}
