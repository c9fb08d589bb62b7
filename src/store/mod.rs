//! PostgreSQL credential store
//!
//! Every operation is a single statement; no multi-statement transactions
//! are needed because all invariants here are per-table.

mod models;

pub use models::{LoginEvent, UserProfile, UserRow};

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::auth::models::PublicUser;
use crate::config::DatabaseConfig;
use crate::error::Result;

/// Handle to the credential store. Cheap to clone; all clones share the
/// bounded connection pool.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connect with a bounded pool: fixed connection cap, acquire timeout,
    /// and idle-connection eviction. A request that cannot acquire a
    /// connection in time fails with a server error instead of blocking.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await?;

        tracing::info!("Database connected successfully");

        Ok(Self { pool })
    }

    /// Create the schema if it does not exist yet
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS audit_logs (
                id BIGSERIAL PRIMARY KEY,
                user_id BIGINT NOT NULL REFERENCES users(id),
                login_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS revoked_tokens (
                token TEXT PRIMARY KEY,
                expires_at TIMESTAMPTZ
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<PublicUser> {
        let user = sqlx::query_as::<_, PublicUser>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)
             RETURNING id, name, email",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Profile fields for an authenticated user
    pub async fn get_profile(&self, user_id: i64) -> Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Record a successful login. The timestamp is store-assigned.
    pub async fn insert_audit_entry(&self, user_id: i64) -> Result<()> {
        sqlx::query("INSERT INTO audit_logs (user_id) VALUES ($1)")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Idempotent: revoking an already-revoked token is a no-op, not an error
    pub async fn insert_revoked_token(
        &self,
        token: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO revoked_tokens (token, expires_at) VALUES ($1, $2)
             ON CONFLICT (token) DO NOTHING",
        )
        .bind(token)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Membership test consulted on every protected request
    pub async fn is_token_revoked(&self, token: &str) -> Result<bool> {
        let (revoked,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token = $1)")
                .bind(token)
                .fetch_one(&self.pool)
                .await?;

        Ok(revoked)
    }

    /// Most recent login events for a user, newest first
    pub async fn recent_logins(&self, user_id: i64, limit: i64) -> Result<Vec<LoginEvent>> {
        let events = sqlx::query_as::<_, LoginEvent>(
            "SELECT login_at FROM audit_logs WHERE user_id = $1 ORDER BY login_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Drop revoked-token rows whose natural expiry has passed. Safe to run
    /// at any time: an expired token is already rejected by the validator's
    /// signature/expiry check before the registry is consulted.
    pub async fn purge_expired_tokens(&self) -> Result<u64> {
        let result =
            sqlx::query("DELETE FROM revoked_tokens WHERE expires_at IS NOT NULL AND expires_at < now()")
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
