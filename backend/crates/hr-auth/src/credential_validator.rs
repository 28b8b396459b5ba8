use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::collections::HashSet;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Algorithms a credential may be signed with. Only the symmetric HMAC
/// family; anything else in the header is rejected before verification.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Verifies credential signatures against a shared secret injected at
/// construction and yields the caller's subject.
pub struct CredentialValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl CredentialValidator {
    pub fn new(secret: &[u8], leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = leeway_secs;
        // exp is optional; checked only when present
        validation.required_spec_claims = HashSet::new();

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify `token` and return its subject
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<String> {
        let claims = self.validate_claims(token)?;
        Ok(claims.subject()?.to_string())
    }

    #[track_caller]
    pub fn validate_claims(&self, token: &str) -> AuthErrorResult<Claims> {
        check_header_algorithm(token)?;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let location = ErrorLocation::from(Location::caller());
                match e.kind() {
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidAlgorithm
                    | ErrorKind::InvalidAlgorithmName
                    | ErrorKind::InvalidKeyFormat => AuthError::SignatureInvalid {
                        message: e.to_string(),
                        location,
                    },
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired { location },
                    ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid { location },
                    _ => AuthError::ClaimsUnreadable {
                        message: e.to_string(),
                        location,
                    },
                }
            })?;

        Ok(token_data.claims)
    }
}

/// Reject non-HMAC algorithms by name, including ones the JWT library
/// cannot represent at all (`none`).
#[track_caller]
fn check_header_algorithm(token: &str) -> AuthErrorResult<()> {
    let unreadable = |message: &str| AuthError::ClaimsUnreadable {
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let header_segment = token
        .split('.')
        .next()
        .ok_or_else(|| unreadable("empty token"))?;
    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_segment)
        .map_err(|_| unreadable("header is not base64url"))?;
    let header: serde_json::Value =
        serde_json::from_slice(&header_bytes).map_err(|_| unreadable("header is not JSON"))?;
    let alg = header
        .get("alg")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| unreadable("header has no alg"))?;

    match alg {
        "HS256" | "HS384" | "HS512" => Ok(()),
        other => Err(AuthError::SignatureInvalid {
            message: format!("algorithm '{other}' is not accepted"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
