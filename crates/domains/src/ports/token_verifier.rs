use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The verified caller behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
}

/// Identity contract: turns a bearer token into a verified user.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AccessTokenVerifier: Send + Sync {
    /// `DomainError::Unauthenticated` when the token is malformed, forged or expired.
    fn verify(&self, token: &str) -> Result<AuthenticatedUser>;
}
