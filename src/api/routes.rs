//! API route handlers

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;

use super::server::SharedState;
use crate::auth::models::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse,
};
use crate::auth::{self, bearer_token, SessionIdentity};
use crate::error::{Error, Result};

/// How many audit entries get_logs returns
const RECENT_LOGINS: i64 = 5;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Keygate backend running" }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

pub async fn signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse> {
    let user = auth::service::sign_up(&state.store, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Signup success".to_string(),
            user,
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let (token, user) = auth::service::log_in(&state.store, &state.tokens, req).await?;

    Ok(Json(LoginResponse {
        message: "Login success".to_string(),
        token,
        user,
    }))
}

/// Logout is not gated by the session validator: only header and token
/// presence are required, so an expired or tampered token can still be
/// blacklisted. Re-revoking is harmless.
pub async fn logout(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let token = bearer_token(&headers)?;
    auth::service::log_out(&state.store, &state.tokens, token).await?;

    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}

pub async fn get_me(
    State(state): State<SharedState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<impl IntoResponse> {
    // The user row backing a valid token is only absent if the account was
    // removed out of band; treat the token as stale in that case.
    let profile = state
        .store
        .get_profile(identity.user_id)
        .await?
        .ok_or(Error::InvalidToken)?;

    Ok(Json(profile))
}

pub async fn get_logs(
    State(state): State<SharedState>,
    Extension(identity): Extension<SessionIdentity>,
) -> Result<impl IntoResponse> {
    let logs = state.store.recent_logins(identity.user_id, RECENT_LOGINS).await?;

    Ok(Json(logs))
}
