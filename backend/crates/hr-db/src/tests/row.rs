use crate::DbError;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_valid_uuid_text_when_parsed_then_returns_uuid() {
    let id = Uuid::new_v4();

    assert_that!(parse_uuid("users", &id.to_string()).unwrap(), eq(id));
}

#[test]
fn given_garbage_id_when_parsed_then_invalid_row_names_table() {
    let result = parse_uuid("weight_entries", "not-a-uuid");

    assert!(matches!(
        result,
        Err(DbError::InvalidRow {
            table: "weight_entries",
            ..
        })
    ));
}

#[test]
fn given_epoch_seconds_when_parsed_then_round_trips() {
    let parsed = parse_timestamp("articles", 1_700_000_000).unwrap();

    assert_that!(parsed.timestamp(), eq(1_700_000_000));
}

#[test]
fn given_out_of_range_timestamp_when_parsed_then_invalid_row() {
    assert_that!(parse_timestamp("articles", i64::MAX), err(anything()));
}
