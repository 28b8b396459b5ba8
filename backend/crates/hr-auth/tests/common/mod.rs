#![allow(dead_code)]

use hr_auth::{AuthInterceptor, Claims, CredentialValidator, IdentityResolver, PublicProcedures};
use hr_db::{UserRepository, connect, run_migrations};

use std::path::Path;
use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "integration-test-secret-32-bytes-min";

pub fn create_test_token(sub: &str, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: Some(sub.to_string()),
        exp: Some(now + exp_offset_secs),
        iat: Some(now),
        nbf: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to mint token")
}

/// File-backed pool so concurrent resolutions use distinct connections
pub async fn create_test_pool(dir: &Path) -> SqlitePool {
    let pool = connect(&dir.join("auth.db"), 8)
        .await
        .expect("Failed to open database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub fn create_interceptor(pool: &SqlitePool) -> AuthInterceptor {
    let store = Arc::new(UserRepository::new(pool.clone()));
    AuthInterceptor::new(
        CredentialValidator::new(TEST_SECRET.as_bytes(), 30),
        IdentityResolver::new(store),
        PublicProcedures::default(),
    )
}

pub async fn count_users_with_subject(pool: &SqlitePool, subject: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE subject = ?")
        .bind(subject)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
