use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// An insert collided with a UNIQUE constraint
    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    /// A stored row could not be mapped back into a domain model
    #[error("Invalid row in {table}: {message} {location}")]
    InvalidRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }

    #[track_caller]
    pub fn invalid_row(table: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRow {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            sqlx::Error::Database(ref e) if e.is_unique_violation() => Self::UniqueViolation {
                message: e.message().to_string(),
                location,
            },
            source => Self::Sqlx { source, location },
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
