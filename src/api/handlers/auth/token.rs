//! Session token minting.
//!
//! Tokens are HS256 JWTs carrying the user id and email, valid for a
//! configurable TTL. The signing secret never leaves this module.

use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs session tokens with a shared HMAC secret.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    ttl_seconds: i64,
}

// Keep the key out of debug output.
impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("encoding_key", &"***")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenSigner {
    #[must_use]
    pub fn new(secret: &SecretString, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.expose_secret().as_bytes()),
            ttl_seconds,
        }
    }

    /// Mint a token for the given user.
    ///
    /// # Errors
    /// Returns an error if JWT encoding fails.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .context("Failed to sign session token")
    }
}
