use crate::{CoreError, MAX_NOTE_LENGTH, MAX_WEIGHT_KG, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    pub user_id: Uuid,

    pub weight_kg: f64,
    pub measured_at: DateTime<Utc>,
    pub note: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeightEntry {
    pub fn new(
        user_id: Uuid,
        weight_kg: f64,
        measured_at: DateTime<Utc>,
        note: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            weight_kg,
            measured_at,
            note,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the measurement before it is persisted
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > MAX_WEIGHT_KG {
            return Err(CoreError::Validation {
                field: "weight_kg",
                message: format!("weight_kg must be greater than 0 and at most {MAX_WEIGHT_KG}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(note) = &self.note
            && note.chars().count() > MAX_NOTE_LENGTH
        {
            return Err(CoreError::Validation {
                field: "note",
                message: format!("note must be at most {MAX_NOTE_LENGTH} characters"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
