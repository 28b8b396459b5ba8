use crate::{CoreError, WeightEntry};

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

fn entry(weight_kg: f64, note: Option<&str>) -> WeightEntry {
    WeightEntry::new(Uuid::new_v4(), weight_kg, Utc::now(), note.map(String::from))
}

#[test]
fn given_typical_weight_when_validated_then_ok() {
    assert_that!(entry(72.4, Some("after breakfast")).validate(), ok(anything()));
}

#[test]
fn given_zero_weight_when_validated_then_weight_field_rejected() {
    let result = entry(0.0, None).validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "weight_kg",
            ..
        })
    ));
}

#[test]
fn given_non_finite_weight_when_validated_then_rejected() {
    assert_that!(entry(f64::NAN, None).validate(), err(anything()));
    assert_that!(entry(f64::INFINITY, None).validate(), err(anything()));
}

#[test]
fn given_weight_above_maximum_when_validated_then_rejected() {
    assert_that!(entry(crate::MAX_WEIGHT_KG + 0.1, None).validate(), err(anything()));
}

#[test]
fn given_overlong_note_when_validated_then_note_field_rejected() {
    let note = "x".repeat(crate::MAX_NOTE_LENGTH + 1);

    let result = entry(70.0, Some(&note)).validate();

    assert_that!(result.unwrap_err().field(), eq("note"));
}
