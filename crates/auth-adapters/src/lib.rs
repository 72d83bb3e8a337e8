//! # auth-adapters
//!
//! Argon2 password hashing and, behind `auth-jwt`, HS256 access tokens that
//! satisfy `domains::AccessTokenVerifier`.

pub mod password;
#[cfg(feature = "auth-jwt")]
pub mod jwt;

pub use password::hash_password;
#[cfg(feature = "auth-jwt")]
pub use jwt::{AccessClaims, JwtTokenManager};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("failed to issue token: {0}")]
    Issue(String),
}
