pub mod articles;
pub mod blood_pressure;
pub mod users;
pub mod weight_entries;

use crate::{Result as RpcErrorResult, RpcError};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Parse a record id from a request field
#[track_caller]
pub(crate) fn parse_id(field: &str, value: &str) -> RpcErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| RpcError::invalid_argument(format!("{field} is not a valid id")))
}

/// Unix seconds to a timestamp; 0 (unset) means now
#[track_caller]
pub(crate) fn parse_measured_at(seconds: i64) -> RpcErrorResult<DateTime<Utc>> {
    if seconds == 0 {
        return Ok(Utc::now());
    }
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| RpcError::invalid_argument("measured_at is out of range"))
}
