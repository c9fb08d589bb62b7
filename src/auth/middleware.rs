//! Session validation middleware and bearer token extraction

use crate::api::SharedState;
use crate::error::{Error, Result};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

/// Pull the bearer token out of the Authorization header.
/// A missing header and a header without a token segment are distinct
/// rejections, each mapping to its own 401 message.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(Error::MissingAuthHeader)?;
    let value = header.to_str().map_err(|_| Error::MissingToken)?;
    value.split_whitespace().nth(1).ok_or(Error::MissingToken)
}

/// Gate for protected routes. Signature and expiry are checked locally
/// first, so malformed or expired tokens never cost a store round-trip;
/// the revocation check then runs against the store on every call, with no
/// caching, so a revocation takes effect on the very next request.
///
/// On success the request carries a `SessionIdentity` in its extensions.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = bearer_token(req.headers())?.to_string();
    let claims = state.tokens.verify(&token)?;

    if state.store.is_token_revoked(&token).await? {
        return Err(Error::TokenRevoked);
    }

    req.extensions_mut().insert(claims.identity());
    Ok(next.run(req).await)
}
