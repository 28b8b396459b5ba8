use crate::{
    CoreError, MAX_DIASTOLIC, MAX_PULSE, MAX_SYSTOLIC, MIN_DIASTOLIC, MIN_PULSE, MIN_SYSTOLIC,
    Result as CoreErrorResult,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single blood pressure measurement in mmHg
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressureReading {
    pub id: Uuid,
    pub user_id: Uuid,

    pub systolic: i32,
    pub diastolic: i32,
    /// Beats per minute, when the device reported it
    pub pulse: Option<i32>,
    pub measured_at: DateTime<Utc>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BloodPressureReading {
    pub fn new(
        user_id: Uuid,
        systolic: i32,
        diastolic: i32,
        pulse: Option<i32>,
        measured_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            systolic,
            diastolic,
            pulse,
            measured_at,
            created_at: now,
            updated_at: now,
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if !(MIN_SYSTOLIC..=MAX_SYSTOLIC).contains(&self.systolic) {
            return Err(Self::out_of_range("systolic", MIN_SYSTOLIC, MAX_SYSTOLIC));
        }

        if !(MIN_DIASTOLIC..=MAX_DIASTOLIC).contains(&self.diastolic) {
            return Err(Self::out_of_range("diastolic", MIN_DIASTOLIC, MAX_DIASTOLIC));
        }

        if self.diastolic >= self.systolic {
            return Err(CoreError::Validation {
                field: "diastolic",
                message: "diastolic must be lower than systolic".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(pulse) = self.pulse
            && !(MIN_PULSE..=MAX_PULSE).contains(&pulse)
        {
            return Err(Self::out_of_range("pulse", MIN_PULSE, MAX_PULSE));
        }

        Ok(())
    }

    #[track_caller]
    fn out_of_range(field: &'static str, min: i32, max: i32) -> CoreError {
        CoreError::Validation {
            field,
            message: format!("{field} must be between {min} and {max}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
