use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } => field,
        }
    }

    /// Message safe to return to a client (no location details)
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
