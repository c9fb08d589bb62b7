//! Error types for Keygate

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found. Run 'keygate init' first.")]
    ConfigNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Email already exists")]
    EmailExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authorization header missing")]
    MissingAuthHeader,

    #[error("Token missing")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token revoked")]
    TokenRevoked,
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Map errors onto the HTTP contract. Validation and auth rejections carry
/// their message to the client; everything else is logged server-side and
/// surfaced as a bare 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            Error::EmailExists | Error::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                json!({ "message": self.to_string() }),
            ),
            Error::MissingAuthHeader
            | Error::MissingToken
            | Error::InvalidToken
            | Error::TokenRevoked => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": self.to_string() }),
            ),
            other => {
                tracing::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
