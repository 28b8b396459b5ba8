use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use hr_core::User;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "users";

#[derive(FromRow)]
struct UserRow {
    id: String,
    subject: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = crate::DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: parse_uuid(TABLE, &row.id)?,
            subject: row.subject,
            created_at: parse_timestamp(TABLE, row.created_at)?,
            updated_at: parse_timestamp(TABLE, row.updated_at)?,
        })
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. A second insert for the same subject fails with
    /// `DbError::UniqueViolation`.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, subject, created_at, updated_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.subject)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_subject(&self, subject: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, subject, created_at, updated_at
              FROM users
              WHERE subject = ?
              "#,
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, subject, created_at, updated_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}
