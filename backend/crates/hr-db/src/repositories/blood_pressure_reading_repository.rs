use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use hr_core::BloodPressureReading;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "blood_pressure_readings";

#[derive(FromRow)]
struct BloodPressureReadingRow {
    id: String,
    user_id: String,
    systolic: i32,
    diastolic: i32,
    pulse: Option<i32>,
    measured_at: i64,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<BloodPressureReadingRow> for BloodPressureReading {
    type Error = crate::DbError;

    fn try_from(row: BloodPressureReadingRow) -> DbErrorResult<Self> {
        Ok(BloodPressureReading {
            id: parse_uuid(TABLE, &row.id)?,
            user_id: parse_uuid(TABLE, &row.user_id)?,
            systolic: row.systolic,
            diastolic: row.diastolic,
            pulse: row.pulse,
            measured_at: parse_timestamp(TABLE, row.measured_at)?,
            created_at: parse_timestamp(TABLE, row.created_at)?,
            updated_at: parse_timestamp(TABLE, row.updated_at)?,
        })
    }
}

pub struct BloodPressureReadingRepository {
    pool: SqlitePool,
}

impl BloodPressureReadingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, reading: &BloodPressureReading) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO blood_pressure_readings (
                  id, user_id, systolic, diastolic, pulse,
                  measured_at, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(reading.id.to_string())
        .bind(reading.user_id.to_string())
        .bind(reading.systolic)
        .bind(reading.diastolic)
        .bind(reading.pulse)
        .bind(reading.measured_at.timestamp())
        .bind(reading.created_at.timestamp())
        .bind(reading.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> DbErrorResult<Vec<BloodPressureReading>> {
        let rows = sqlx::query_as::<_, BloodPressureReadingRow>(
            r#"
              SELECT id, user_id, systolic, diastolic, pulse,
                     measured_at, created_at, updated_at
              FROM blood_pressure_readings
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

        rows.into_iter()
            .map(BloodPressureReading::try_from)
            .collect()
    }

    pub async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let result =
            sqlx::query("DELETE FROM blood_pressure_readings WHERE id = ? AND user_id = ?")
                .bind(id.to_string())
                .bind(user_id.to_string())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
