#![allow(dead_code)]

use hr_db::{connect, connect_in_memory, run_migrations};

use std::path::Path;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed pool with several connections, for tests that need real
/// parallel writers.
pub async fn create_file_pool(dir: &Path, max_connections: u32) -> SqlitePool {
    let pool = connect(&dir.join("test.db"), max_connections)
        .await
        .expect("Failed to create file pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn count_users_with_subject(pool: &SqlitePool, subject: &str) -> i64 {
    // Use sqlx::query_scalar (not query!) to avoid offline mode issues in tests
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE subject = ?")
        .bind(subject)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
