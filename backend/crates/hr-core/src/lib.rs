pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::article::Article;
pub use models::blood_pressure_reading::BloodPressureReading;
pub use models::user::User;
pub use models::weight_entry::WeightEntry;

/// Upper bound for a recorded body weight, in kilograms
pub const MAX_WEIGHT_KG: f64 = 1000.0;
/// Maximum length of a free-text note attached to a record
pub const MAX_NOTE_LENGTH: usize = 500;

pub const MIN_SYSTOLIC: i32 = 50;
pub const MAX_SYSTOLIC: i32 = 300;
pub const MIN_DIASTOLIC: i32 = 30;
pub const MAX_DIASTOLIC: i32 = 200;
pub const MIN_PULSE: i32 = 20;
pub const MAX_PULSE: i32 = 250;

#[cfg(test)]
mod tests;
