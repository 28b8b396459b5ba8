use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Registered claims read from an externally issued credential.
///
/// Only `sub` is required; the temporal claims are optional and are checked
/// by the validator when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// External subject identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiration (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Not before (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

impl Claims {
    /// The subject, rejecting a missing, empty or whitespace-only value
    #[track_caller]
    pub fn subject(&self) -> AuthErrorResult<&str> {
        match self.sub.as_deref() {
            Some(sub) if !sub.trim().is_empty() => Ok(sub),
            _ => Err(AuthError::SubjectMissing {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
