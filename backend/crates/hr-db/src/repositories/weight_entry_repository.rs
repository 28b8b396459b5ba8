use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use hr_core::WeightEntry;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "weight_entries";

#[derive(FromRow)]
struct WeightEntryRow {
    id: String,
    user_id: String,
    weight_kg: f64,
    measured_at: i64,
    note: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<WeightEntryRow> for WeightEntry {
    type Error = crate::DbError;

    fn try_from(row: WeightEntryRow) -> DbErrorResult<Self> {
        Ok(WeightEntry {
            id: parse_uuid(TABLE, &row.id)?,
            user_id: parse_uuid(TABLE, &row.user_id)?,
            weight_kg: row.weight_kg,
            measured_at: parse_timestamp(TABLE, row.measured_at)?,
            note: row.note,
            created_at: parse_timestamp(TABLE, row.created_at)?,
            updated_at: parse_timestamp(TABLE, row.updated_at)?,
        })
    }
}

/// Weight entries are only ever read or deleted through their owner.
pub struct WeightEntryRepository {
    pool: SqlitePool,
}

impl WeightEntryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, entry: &WeightEntry) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO weight_entries (
                  id, user_id, weight_kg, measured_at, note, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(entry.weight_kg)
        .bind(entry.measured_at.timestamp())
        .bind(entry.note.as_deref())
        .bind(entry.created_at.timestamp())
        .bind(entry.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> DbErrorResult<Option<WeightEntry>> {
        let row = sqlx::query_as::<_, WeightEntryRow>(
            r#"
              SELECT id, user_id, weight_kg, measured_at, note, created_at, updated_at
              FROM weight_entries
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(WeightEntry::try_from).transpose()
    }

    /// Newest measurement first, ties broken by id.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> DbErrorResult<Vec<WeightEntry>> {
        let rows = sqlx::query_as::<_, WeightEntryRow>(
            r#"
              SELECT id, user_id, weight_kg, measured_at, note, created_at, updated_at
              FROM weight_entries
              WHERE user_id = ?
              ORDER BY measured_at DESC, id DESC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WeightEntry::try_from).collect()
    }

    /// Returns false when no entry with this id belongs to the user.
    pub async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM weight_entries WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
