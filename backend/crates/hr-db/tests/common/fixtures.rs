#![allow(dead_code)]

use hr_core::{Article, BloodPressureReading, User, WeightEntry};
use hr_db::UserRepository;

use chrono::{Duration, TimeZone, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Inserts a user so record rows satisfy their foreign key
pub async fn create_test_user(pool: &SqlitePool, subject: &str) -> User {
    let user = User::new(subject);
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

/// Weight entry measured `minutes_ago` minutes before a fixed instant
pub fn create_test_weight_entry(user_id: Uuid, weight_kg: f64, minutes_ago: i64) -> WeightEntry {
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    WeightEntry::new(
        user_id,
        weight_kg,
        base - Duration::minutes(minutes_ago),
        Some("morning".to_string()),
    )
}

pub fn create_test_reading(user_id: Uuid, systolic: i32, minutes_ago: i64) -> BloodPressureReading {
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    BloodPressureReading::new(
        user_id,
        systolic,
        80,
        Some(62),
        base - Duration::minutes(minutes_ago),
    )
}

pub fn create_test_article(title: &str, days_ago: i64) -> Article {
    let base = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
    Article {
        id: Uuid::new_v4(),
        title: title.to_string(),
        summary: format!("{title} summary"),
        body: format!("{title} body"),
        published_at: base - Duration::days(days_ago),
    }
}
