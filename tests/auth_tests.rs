//! Authentication core tests: token issuance, bearer extraction,
//! credential hashing, and signup validation through the library API

use axum::http::{header, HeaderMap, HeaderValue};
use keygate::auth::password::{hash_password, verify_password};
use keygate::auth::validation::validate_signup;
use keygate::auth::{bearer_token, TokenIssuer};
use keygate::Error;

fn issuer() -> TokenIssuer {
    TokenIssuer::new("auth-test-secret", 3600).expect("Failed to create issuer")
}

#[test]
fn test_token_has_jwt_format() {
    let token = issuer().issue(1, "a@b.com").expect("Failed to issue");
    assert_eq!(token.split('.').count(), 3); // JWT format: header.payload.signature
}

#[test]
fn test_token_verifies_immediately_after_issuance() {
    let issuer = issuer();
    let token = issuer.issue(42, "alice@example.com").expect("Failed to issue");
    let claims = issuer.verify(&token).expect("Failed to verify");

    assert_eq!(claims.sub, 42);
    assert_eq!(claims.email, "alice@example.com");
    assert!(claims.exp > chrono::Utc::now().timestamp());
}

#[test]
fn test_expired_token_fails_verification() {
    // a negative ttl backdates the expiry past the verification instant
    let backdated = TokenIssuer::new("auth-test-secret", -1).expect("Failed to create issuer");
    let token = backdated.issue(42, "alice@example.com").expect("Failed to issue");

    assert!(matches!(issuer().verify(&token), Err(Error::InvalidToken)));
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let other = TokenIssuer::new("some-other-secret", 3600).expect("Failed to create issuer");
    let token = other.issue(42, "alice@example.com").expect("Failed to issue");

    assert!(issuer().verify(&token).is_err());
}

#[test]
fn test_tampered_token_still_decodes_unchecked() {
    // logout needs the expiry claim even from tokens the validator rejects
    let other = TokenIssuer::new("some-other-secret", 3600).expect("Failed to create issuer");
    let token = other.issue(7, "bob@example.com").expect("Failed to issue");

    let issuer = issuer();
    assert!(issuer.verify(&token).is_err());
    let claims = issuer.decode_unchecked(&token).expect("Failed to decode");
    assert_eq!(claims.sub, 7);
}

#[test]
fn test_garbage_does_not_decode_unchecked() {
    assert!(issuer().decode_unchecked("not-a-jwt-token").is_none());
}

#[test]
fn test_password_roundtrip() {
    let hash = hash_password("secret1").expect("Failed to hash");
    assert!(verify_password("secret1", &hash));
    assert!(!verify_password("secret2", &hash));
}

#[test]
fn test_distinct_users_get_distinct_tokens() {
    let issuer = issuer();
    let token1 = issuer.issue(1, "alice@example.com").expect("Failed to issue");
    let token2 = issuer.issue(2, "bob@example.com").expect("Failed to issue");

    assert_ne!(token1, token2);
    assert_eq!(issuer.verify(&token1).expect("verify").sub, 1);
    assert_eq!(issuer.verify(&token2).expect("verify").sub, 2);
}

#[test]
fn test_bearer_extraction_states() {
    let empty = HeaderMap::new();
    assert!(matches!(bearer_token(&empty), Err(Error::MissingAuthHeader)));

    let mut no_token = HeaderMap::new();
    no_token.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer"));
    assert!(matches!(bearer_token(&no_token), Err(Error::MissingToken)));

    let mut ok = HeaderMap::new();
    ok.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    assert_eq!(bearer_token(&ok).expect("token"), "tok");
}

#[test]
fn test_signup_validation_accepts_valid_input() {
    assert!(validate_signup("Alice", "a@b.com", "secret1").is_empty());
}

#[test]
fn test_signup_validation_accumulates_all_errors() {
    let errors = validate_signup("A", "not-an-email", "short");
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| e.contains("Name")));
    assert!(errors.iter().any(|e| e.contains("email")));
    assert!(errors.iter().any(|e| e.contains("Password")));
}
