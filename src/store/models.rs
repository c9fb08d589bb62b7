//! Row types read from the credential store

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::auth::models::PublicUser;

/// A user row as stored, password hash included. Never serialized to
/// clients; responses go through `PublicUser` or `UserProfile`.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for PublicUser {
    fn from(user: UserRow) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Profile view returned to an authenticated user
#[derive(Debug, Serialize, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// One successful login event from the audit log
#[derive(Debug, Serialize, FromRow)]
pub struct LoginEvent {
    pub login_at: DateTime<Utc>,
}
