pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite_pool::{connect, connect_in_memory, ping, run_migrations};
pub use error::{DbError, Result};
pub use repositories::article_repository::ArticleRepository;
pub use repositories::blood_pressure_reading_repository::BloodPressureReadingRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::weight_entry_repository::WeightEntryRepository;

#[cfg(test)]
mod tests;
