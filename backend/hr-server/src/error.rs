use hr_config::ConfigError;
use hr_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("I/O error: {message}: {source} {location}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
