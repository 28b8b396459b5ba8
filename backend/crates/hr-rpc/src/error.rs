use hr_auth::AuthError;
use hr_core::CoreError;
use hr_db::DbError;

use std::panic::Location;

use axum::Json;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

/// Outward error code. Also stored in the extensions of every error
/// response so outer middleware can count failures by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    InvalidArgument,
    Unauthenticated,
    NotFound,
    Unimplemented,
    Internal,
    DeadlineExceeded,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Unauthenticated => "unauthenticated",
            Self::NotFound => "not_found",
            Self::Unimplemented => "unimplemented",
            Self::Internal => "internal",
            Self::DeadlineExceeded => "deadline_exceeded",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unimplemented => StatusCode::NOT_IMPLEMENTED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct RpcErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    /// Every credential failure. The cause stays in server logs.
    #[error("Unauthenticated: {reason} {location}")]
    Unauthenticated {
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unimplemented procedure: {procedure} {location}")]
    Unimplemented {
        procedure: String,
        location: ErrorLocation,
    },

    /// `message` is server-side detail and never sent to the client
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    #[error("Deadline of {timeout_ms}ms exceeded {location}")]
    DeadlineExceeded {
        timeout_ms: u128,
        location: ErrorLocation,
    },
}

impl RpcError {
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn code(&self) -> Code {
        match self {
            Self::InvalidArgument { .. } => Code::InvalidArgument,
            Self::Unauthenticated { .. } => Code::Unauthenticated,
            Self::NotFound { .. } => Code::NotFound,
            Self::Unimplemented { .. } => Code::Unimplemented,
            Self::Internal { .. } => Code::Internal,
            Self::DeadlineExceeded { .. } => Code::DeadlineExceeded,
        }
    }

    /// Message safe to return to a client
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidArgument { message, .. } | Self::NotFound { message, .. } => {
                message.clone()
            }
            Self::Unauthenticated { .. } => "unauthenticated".to_string(),
            Self::Unimplemented { procedure, .. } => {
                format!("procedure {procedure} is not implemented")
            }
            Self::Internal { .. } => "internal error".to_string(),
            Self::DeadlineExceeded { .. } => "deadline exceeded".to_string(),
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let code = self.code();
        match code {
            Code::Internal => error!("{self}"),
            _ => debug!("{self}"),
        }

        let body = RpcErrorBody {
            code: code.as_str(),
            message: self.client_message(),
        };

        let mut response = (code.http_status(), Json(body)).into_response();
        response.extensions_mut().insert(code);
        response
    }
}

impl From<CoreError> for RpcError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        Self::InvalidArgument {
            message: e.client_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for RpcError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Storage detail stays server-side
        Self::Internal {
            message: format!("database: {e}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for RpcError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if e.is_unauthenticated() {
            Self::Unauthenticated {
                reason: e.reason(),
                location,
            }
        } else {
            Self::Internal {
                message: format!("auth: {e}"),
                location,
            }
        }
    }
}

impl From<prost::DecodeError> for RpcError {
    #[track_caller]
    fn from(e: prost::DecodeError) -> Self {
        debug!("Protobuf decode failed: {e}");
        Self::InvalidArgument {
            message: "request body is not a valid protobuf message".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RpcError>;
