use super::tokens::{SECRET, claims_for, forged_with_alg, mint, mint_with, now};

use crate::{AuthError, AuthStage, Claims, CredentialValidator};

use googletest::prelude::*;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

fn validator() -> CredentialValidator {
    CredentialValidator::new(SECRET, 30)
}

#[test]
fn given_valid_token_when_validated_then_returns_subject() {
    let token = mint(&claims_for("alice", Some(3600)), SECRET);

    assert_that!(validator().validate(&token).unwrap(), eq("alice"));
}

#[test]
fn given_token_without_exp_when_validated_then_accepted() {
    let token = mint(&claims_for("alice", None), SECRET);

    assert_that!(validator().validate(&token).unwrap(), eq("alice"));
}

#[test]
fn given_hs384_and_hs512_tokens_when_validated_then_accepted() {
    for algorithm in [Algorithm::HS384, Algorithm::HS512] {
        let token = mint_with(algorithm, &claims_for("alice", Some(60)), SECRET);
        assert_that!(validator().validate(&token).unwrap(), eq("alice"));
    }
}

#[test]
fn given_expired_token_when_validated_then_token_expired() {
    let token = mint(&claims_for("alice", Some(-3600)), SECRET);

    let result = validator().validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_token_expired_within_leeway_when_validated_then_accepted() {
    let token = mint(&claims_for("alice", Some(-5)), SECRET);

    assert_that!(validator().validate(&token).unwrap(), eq("alice"));
}

#[test]
fn given_future_nbf_when_validated_then_not_yet_valid() {
    let mut claims = claims_for("alice", Some(7200));
    claims.nbf = Some(now() + 3600);
    let token = mint(&claims, SECRET);

    let result = validator().validate(&token);

    assert!(matches!(result, Err(AuthError::TokenNotYetValid { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_signature_invalid() {
    let token = mint(
        &claims_for("alice", Some(3600)),
        b"some-other-secret-that-is-also-32-bytes",
    );

    let result = validator().validate(&token);

    assert!(matches!(result, Err(AuthError::SignatureInvalid { .. })));
}

#[test]
fn given_asymmetric_or_none_alg_when_validated_then_signature_invalid() {
    for alg in ["RS256", "ES256", "EdDSA", "none"] {
        let token = forged_with_alg(alg, "alice");
        let result = validator().validate(&token);
        assert!(
            matches!(result, Err(AuthError::SignatureInvalid { .. })),
            "{alg} should be rejected as a signature failure"
        );
    }
}

#[test]
fn given_payload_that_is_not_an_object_when_validated_then_claims_unreadable() {
    let token = encode(
        &Header::default(),
        &"hello",
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap();

    let result = validator().validate(&token);

    assert!(matches!(result, Err(AuthError::ClaimsUnreadable { .. })));
}

#[test]
fn given_numeric_sub_when_validated_then_claims_unreadable() {
    let token = encode(
        &Header::default(),
        &serde_json::json!({ "sub": 42, "exp": now() + 60 }),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap();

    let result = validator().validate(&token);

    assert!(matches!(result, Err(AuthError::ClaimsUnreadable { .. })));
}

#[test]
fn given_garbage_token_when_validated_then_claims_unreadable() {
    let result = validator().validate("abc123");

    assert!(matches!(result, Err(AuthError::ClaimsUnreadable { .. })));
}

#[test]
fn given_missing_or_blank_subject_when_validated_then_subject_missing() {
    let no_sub = Claims {
        exp: Some(now() + 60),
        ..Claims::default()
    };
    let blank_sub = claims_for("   ", Some(60));
    let empty_sub = claims_for("", Some(60));

    for claims in [no_sub, blank_sub, empty_sub] {
        let result = validator().validate(&mint(&claims, SECRET));
        assert!(matches!(result, Err(AuthError::SubjectMissing { .. })));
    }
}

#[test]
fn given_validator_failure_when_stage_requested_then_validating() {
    let error = validator().validate("abc123").unwrap_err();

    assert_that!(error.stage(), some(eq(AuthStage::Validating)));
    assert_that!(error.is_unauthenticated(), eq(true));
}
