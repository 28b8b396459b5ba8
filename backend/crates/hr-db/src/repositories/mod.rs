pub mod article_repository;
pub mod blood_pressure_reading_repository;
pub mod user_repository;
pub mod weight_entry_repository;

pub(crate) mod row;
