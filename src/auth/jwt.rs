//! JWT token handling

use crate::auth::models::SessionIdentity;
use crate::error::{Error, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i64,
    /// Email the token was issued for
    pub email: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Request-scoped identity derived from the claims
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity {
            user_id: self.sub,
            email: self.email.clone(),
            expires_at: self.exp,
        }
    }
}

/// Signs and verifies bearer tokens with a process-wide secret.
/// Constructed once at startup and shared through the application state.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// An empty secret is a fatal startup condition, not a per-request error
    pub fn new(secret: &str, ttl_secs: i64) -> Result<Self> {
        if secret.is_empty() {
            return Err(Error::Config(
                "Token signing secret is empty".to_string(),
            ));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        })
    }

    /// Create a signed, time-bounded token for a user
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Validate signature and expiry without consulting any store.
    /// Zero leeway: a token is rejected exactly at its expiry instant.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| Error::InvalidToken)
    }

    /// Extract claims without checking signature or expiry. Used only to
    /// recover a token's own expiry at logout time, never for authorization.
    pub fn decode_unchecked(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .ok()
    }
}
