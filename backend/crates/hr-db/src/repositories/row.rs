use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(table: &'static str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::invalid_row(table, format!("bad id '{value}': {e}")))
}

#[track_caller]
pub(crate) fn parse_timestamp(table: &'static str, secs: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::invalid_row(table, format!("timestamp out of range: {secs}")))
}
