use crate::AuthStage;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure modes are distinct for server-side logging. Outward, every
/// credential failure collapses to the same `unauthenticated` response.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization credential {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("Malformed authorization credential: {message} {location}")]
    MalformedCredential {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential signature invalid: {message} {location}")]
    SignatureInvalid {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Credential not yet valid {location}")]
    TokenNotYetValid { location: ErrorLocation },

    #[error("Credential claims unreadable: {message} {location}")]
    ClaimsUnreadable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential has no subject {location}")]
    SubjectMissing { location: ErrorLocation },

    #[error("Identity provisioning failed: {message} {location}")]
    IdentityProvisioningFailed {
        message: String,
        location: ErrorLocation,
    },

    /// A handler asked for the caller's identity on a request that has none
    #[error("No resolved identity on request {location}")]
    IdentityNotPresent { location: ErrorLocation },
}

impl AuthError {
    #[track_caller]
    pub fn missing_credential() -> Self {
        Self::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_credential(message: impl Into<String>) -> Self {
        Self::MalformedCredential {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_provisioning_failed(message: impl Into<String>) -> Self {
        Self::IdentityProvisioningFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stage at which the interceptor rejected the call.
    /// `None` for errors raised after authentication completed.
    pub fn stage(&self) -> Option<AuthStage> {
        match self {
            Self::MissingCredential { .. } | Self::MalformedCredential { .. } => {
                Some(AuthStage::Parsing)
            }
            Self::SignatureInvalid { .. }
            | Self::TokenExpired { .. }
            | Self::TokenNotYetValid { .. }
            | Self::ClaimsUnreadable { .. }
            | Self::SubjectMissing { .. } => Some(AuthStage::Validating),
            Self::IdentityProvisioningFailed { .. } => Some(AuthStage::Resolving),
            Self::IdentityNotPresent { .. } => None,
        }
    }

    /// True for every failure that is the caller's fault
    pub fn is_unauthenticated(&self) -> bool {
        !matches!(
            self,
            Self::IdentityProvisioningFailed { .. } | Self::IdentityNotPresent { .. }
        )
    }

    /// Stable snake_case reason, used for logs and metric names
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "missing_credential",
            Self::MalformedCredential { .. } => "malformed_credential",
            Self::SignatureInvalid { .. } => "signature_invalid",
            Self::TokenExpired { .. } => "token_expired",
            Self::TokenNotYetValid { .. } => "token_not_yet_valid",
            Self::ClaimsUnreadable { .. } => "claims_unreadable",
            Self::SubjectMissing { .. } => "subject_missing",
            Self::IdentityProvisioningFailed { .. } => "identity_provisioning_failed",
            Self::IdentityNotPresent { .. } => "identity_not_present",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
