use chrono::Utc;
use domains::{AccessTokenVerifier, AuthenticatedUser, DomainError};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Payload of an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub id: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 access tokens signed with one shared key.
pub struct JwtTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_age_secs: i64,
}

impl JwtTokenManager {
    pub fn new(secret: &[u8], access_token_age_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            access_token_age_secs: i64::try_from(access_token_age_secs).unwrap_or(i64::MAX),
        }
    }

    /// Signs a token for `user` that expires after the configured age.
    pub fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        self.sign(&AccessClaims {
            id: user.id.clone(),
            username: user.username.clone(),
            iat,
            exp: iat.saturating_add(self.access_token_age_secs),
        })
    }

    pub fn sign(&self, claims: &AccessClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Issue(e.to_string()))
    }
}

impl AccessTokenVerifier for JwtTokenManager {
    fn verify(&self, token: &str) -> domains::Result<AuthenticatedUser> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::warn!(error = %e, "access token rejected");
                match e.kind() {
                    ErrorKind::ExpiredSignature => DomainError::unauthenticated("Token expired"),
                    _ => DomainError::unauthenticated("Invalid token"),
                }
            })?;

        Ok(AuthenticatedUser { id: data.claims.id, username: data.claims.username })
    }
}
