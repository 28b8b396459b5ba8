use crate::{AuthError, Result as AuthErrorResult};

use http::HeaderMap;
use http::header::AUTHORIZATION;

const BEARER_SCHEME: &str = "Bearer";

/// Extract the bare token from an `Authorization` value of the exact form
/// `Bearer <token>`.
///
/// The value must split on a single space into exactly two parts, the
/// scheme is case-sensitive and the token must be non-empty. Double spaces,
/// trailing spaces and `Bearer ` with nothing after it are all malformed.
#[track_caller]
pub fn parse_bearer(value: Option<&str>) -> AuthErrorResult<&str> {
    let value = match value {
        None | Some("") => return Err(AuthError::missing_credential()),
        Some(value) => value,
    };

    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        [scheme, token] if *scheme == BEARER_SCHEME && !token.is_empty() => Ok(token),
        [scheme, _] if *scheme != BEARER_SCHEME => Err(AuthError::malformed_credential(
            "authorization scheme must be 'Bearer'",
        )),
        [_, _] => Err(AuthError::malformed_credential("empty bearer token")),
        _ => Err(AuthError::malformed_credential(
            "expected 'Bearer <token>'",
        )),
    }
}

/// Read and parse the `Authorization` header.
///
/// A value that is not visible ASCII cannot be a bearer credential and is
/// treated as malformed.
#[track_caller]
pub fn parse_authorization_header(headers: &HeaderMap) -> AuthErrorResult<String> {
    let value = match headers.get(AUTHORIZATION) {
        None => None,
        Some(raw) => Some(raw.to_str().map_err(|_| {
            AuthError::malformed_credential("authorization header is not visible ASCII")
        })?),
    };

    parse_bearer(value).map(str::to_string)
}
