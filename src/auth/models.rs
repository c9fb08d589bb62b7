//! Authentication request and response models

use serde::{Deserialize, Serialize};

/// Signup payload
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User fields safe for client responses -- never the password hash
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Signup response
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Login response with token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// Bare message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Authenticated identity for the lifetime of a single request.
/// Owned by the request that produced it; never persisted.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_id: i64,
    pub email: String,
    /// Unix timestamp of the token's expiry
    pub expires_at: i64,
}
