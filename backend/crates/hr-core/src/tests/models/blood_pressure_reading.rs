use crate::BloodPressureReading;

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

fn reading(systolic: i32, diastolic: i32, pulse: Option<i32>) -> BloodPressureReading {
    BloodPressureReading::new(Uuid::new_v4(), systolic, diastolic, pulse, Utc::now())
}

#[test]
fn given_normal_reading_when_validated_then_ok() {
    assert_that!(reading(120, 80, Some(64)).validate(), ok(anything()));
}

#[test]
fn given_reading_without_pulse_when_validated_then_ok() {
    assert_that!(reading(135, 85, None).validate(), ok(anything()));
}

#[test]
fn given_systolic_out_of_range_when_validated_then_systolic_rejected() {
    let error = reading(400, 80, None).validate().unwrap_err();

    assert_that!(error.field(), eq("systolic"));
}

#[test]
fn given_diastolic_not_below_systolic_when_validated_then_diastolic_rejected() {
    let error = reading(110, 110, None).validate().unwrap_err();

    assert_that!(error.field(), eq("diastolic"));
    assert_that!(error.client_message(), contains_substring("lower than systolic"));
}

#[test]
fn given_implausible_pulse_when_validated_then_pulse_rejected() {
    let error = reading(120, 80, Some(5)).validate().unwrap_err();

    assert_that!(error.field(), eq("pulse"));
}
