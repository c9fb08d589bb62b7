//! Authentication and session validation

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;
pub mod validation;

pub use jwt::{Claims, TokenIssuer};
pub use middleware::{bearer_token, require_auth};
pub use models::{PublicUser, SessionIdentity};
