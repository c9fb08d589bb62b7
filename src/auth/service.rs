//! Signup, login, and logout orchestration

use chrono::{TimeZone, Utc};

use crate::auth::jwt::TokenIssuer;
use crate::auth::models::{LoginRequest, PublicUser, SignupRequest};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::validation::validate_signup;
use crate::error::{Error, Result};
use crate::store::Store;

/// Create a new user account. Stateless validation runs first and returns
/// every violation without touching the store; the uniqueness check is the
/// only store round-trip before the insert.
pub async fn sign_up(store: &Store, req: SignupRequest) -> Result<PublicUser> {
    let errors = validate_signup(&req.name, &req.email, &req.password);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    if store.find_user_by_email(&req.email).await?.is_some() {
        return Err(Error::EmailExists);
    }

    let password_hash = hash_password(&req.password)?;
    store.insert_user(&req.name, &req.email, &password_hash).await
}

/// Verify credentials, issue a token, and record the login event.
/// An unknown email and a wrong password return the same rejection, so the
/// response never reveals whether an account exists.
pub async fn log_in(
    store: &Store,
    tokens: &TokenIssuer,
    req: LoginRequest,
) -> Result<(String, PublicUser)> {
    let user = store
        .find_user_by_email(&req.email)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(Error::InvalidCredentials);
    }

    let token = tokens.issue(user.id, &user.email)?;
    store.insert_audit_entry(user.id).await?;

    Ok((token, user.into()))
}

/// Blacklist the literal token string. The token's own expiry claim is
/// recovered without signature verification so the registry can be pruned
/// later; an expired or tampered token can still be logged out, and
/// revoking the same token twice is a no-op.
pub async fn log_out(store: &Store, tokens: &TokenIssuer, token: &str) -> Result<()> {
    let expires_at = tokens
        .decode_unchecked(token)
        .and_then(|claims| Utc.timestamp_opt(claims.exp, 0).single());

    store.insert_revoked_token(token, expires_at).await
}
