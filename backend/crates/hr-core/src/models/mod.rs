pub mod article;
pub mod blood_pressure_reading;
pub mod user;
pub mod weight_entry;
