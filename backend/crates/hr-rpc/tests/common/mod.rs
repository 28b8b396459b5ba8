#![allow(dead_code)]

use hr_auth::Claims;
use hr_core::Article;
use hr_db::{ArticleRepository, connect, run_migrations};
use hr_rpc::{AppState, Code, PROTO_CONTENT_TYPE, build_interceptor, build_rpc_router, procedures};

use std::time::Duration;

use axum::Router;
use axum::body::{Body, Bytes};
use chrono::Utc;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use prost::Message;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "rpc-integration-test-secret-32-bytes";
pub const OTHER_SECRET: &str = "a-completely-different-secret-32-bytes";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub pool: SqlitePool,
    _dir: TempDir,
}

/// File-backed database so concurrent calls use distinct connections
pub async fn create_test_app() -> TestApp {
    create_test_app_with_timeout(Duration::from_secs(30)).await
}

pub async fn create_test_app_with_timeout(timeout: Duration) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = connect(&dir.path().join("rpc.db"), 8)
        .await
        .expect("Failed to open database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let interceptor = build_interceptor(
        &pool,
        TEST_SECRET.as_bytes(),
        30,
        [procedures::LIST_ARTICLES, procedures::GET_ARTICLE],
    );
    let state = AppState::new(pool.clone(), interceptor, timeout);

    TestApp {
        router: build_rpc_router(state.clone()),
        state,
        pool,
        _dir: dir,
    }
}

pub fn create_token_with_secret(sub: &str, exp_offset_secs: i64, secret: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Some(sub.to_string()),
        exp: Some(now + exp_offset_secs),
        iat: Some(now),
        nbf: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to mint token")
}

pub fn create_token(sub: &str) -> String {
    create_token_with_secret(sub, 3600, TEST_SECRET)
}

pub fn bearer(sub: &str) -> String {
    format!("Bearer {}", create_token(sub))
}

pub fn rpc_request<M: Message>(procedure: &str, message: &M, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(procedure)
        .header(CONTENT_TYPE, PROTO_CONTENT_TYPE);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder
        .body(Body::from(message.encode_to_vec()))
        .expect("Failed to build request")
}

pub struct RpcResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RpcResponse {
    pub fn decode<M: Message + Default>(&self) -> M {
        assert_eq!(self.status, StatusCode::OK, "unexpected error body: {:?}", self.body);
        M::decode(self.body.clone()).expect("Failed to decode response")
    }

    pub fn error_code(&self) -> String {
        let json: serde_json::Value =
            serde_json::from_slice(&self.body).expect("Error body is not JSON");
        json["code"].as_str().unwrap_or_default().to_string()
    }

    pub fn error_message(&self) -> String {
        let json: serde_json::Value =
            serde_json::from_slice(&self.body).expect("Error body is not JSON");
        json["message"].as_str().unwrap_or_default().to_string()
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> RpcResponse {
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
    RpcResponse { status, body }
}

pub async fn call<M: Message>(
    router: &Router,
    procedure: &str,
    message: &M,
    authorization: Option<&str>,
) -> RpcResponse {
    send(router, rpc_request(procedure, message, authorization)).await
}

pub fn code_name(code: Code) -> String {
    code.as_str().to_string()
}

pub async fn count_users_with_subject(pool: &SqlitePool, subject: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE subject = ?")
        .bind(subject)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

pub async fn create_test_article(pool: &SqlitePool, title: &str, days_ago: i64) -> Article {
    let article = Article {
        id: Uuid::new_v4(),
        title: title.to_string(),
        summary: format!("{title} summary"),
        body: format!("{title} body"),
        published_at: Utc::now() - chrono::Duration::days(days_ago),
    };
    ArticleRepository::new(pool.clone())
        .create(&article)
        .await
        .expect("Failed to create article");
    article
}
