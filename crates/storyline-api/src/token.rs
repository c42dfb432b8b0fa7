//! Session token signing and verification.
//!
//! Tokens are HS256 JWTs carrying the player id (`sub`), the player name,
//! and an expiry derived from the configured TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use storyline_core::player::SessionUser;

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: i64,
    name: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies session tokens with a shared HS256 secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    /// Creates a signer from the shared secret and token lifetime.
    #[must_use]
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issues a signed token for `user`, valid from `now` until the TTL
    /// elapses.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::TokenIssuance` if signing fails.
    pub fn sign(&self, user: &SessionUser, now: DateTime<Utc>) -> Result<String, ApiError> {
        let claims = SessionClaims {
            sub: user.sub,
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| ApiError::TokenIssuance)
    }

    /// Verifies a token and returns the session identity it carries.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidSession` for any malformed, tampered, or
    /// expired token.
    pub fn verify(&self, token: &str) -> Result<SessionUser, ApiError> {
        let data = decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map_err(|_| ApiError::InvalidSession)?;
        Ok(SessionUser {
            sub: data.claims.sub,
            name: data.claims.name,
        })
    }
}
