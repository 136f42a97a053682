//! Registration and login against either credential mode.

use super::{
    error::AuthError,
    storage::{self, ConsumeOutcome, InsertUserOutcome},
    token::TokenSigner,
    types::Credential,
};
use anyhow::Context;
use sqlx::PgPool;
use tracing::debug;

const BCRYPT_COST: u32 = 10;

/// Verifies credentials and mints session tokens.
#[derive(Debug)]
pub struct Authenticator {
    pool: PgPool,
    signer: TokenSigner,
}

impl Authenticator {
    #[must_use]
    pub fn new(pool: PgPool, signer: TokenSigner) -> Self {
        Self { pool, signer }
    }

    /// Create a user with the given credential and return a session token.
    ///
    /// Password registrations store a bcrypt hash. Code registrations consume
    /// the current code and leave `password_hash` NULL.
    pub(super) async fn register(
        &self,
        email: &str,
        credential: Credential,
    ) -> Result<String, AuthError> {
        if storage::user_exists(&self.pool, email).await? {
            return Err(AuthError::Conflict);
        }

        let password_hash = match credential {
            Credential::Password(password) => {
                let hash = bcrypt::hash(&password, BCRYPT_COST)
                    .context("Failed to hash password")
                    .map_err(AuthError::Internal)?;
                Some(hash)
            }
            Credential::Otp(submitted) => {
                match storage::consume_latest_code(&self.pool, email, &submitted).await? {
                    ConsumeOutcome::Consumed => None,
                    ConsumeOutcome::Missing | ConsumeOutcome::Mismatch => {
                        return Err(AuthError::InvalidOtp);
                    }
                    ConsumeOutcome::Expired => return Err(AuthError::ExpiredOtp),
                }
            }
        };

        // The exists check above is advisory, the unique index decides races.
        let user_id = match storage::insert_user(&self.pool, email, password_hash.as_deref()).await?
        {
            InsertUserOutcome::Created(id) => id,
            InsertUserOutcome::Conflict => return Err(AuthError::Conflict),
        };

        debug!(user_id = %user_id, "user registered");

        Ok(self.signer.issue(user_id, email)?)
    }

    /// Authenticate an existing user and return a session token.
    ///
    /// Unknown email, wrong password, and wrong code all collapse into
    /// `InvalidCredential` so responses do not leak which part failed.
    pub(super) async fn login(
        &self,
        email: &str,
        credential: Credential,
    ) -> Result<String, AuthError> {
        let Some(user) = storage::lookup_user(&self.pool, email).await? else {
            return Err(AuthError::InvalidCredential);
        };

        match credential {
            Credential::Password(password) => {
                let Some(hash) = user.password_hash.as_deref() else {
                    // OTP-only account, no password to check against.
                    return Err(AuthError::InvalidCredential);
                };

                let verified = bcrypt::verify(&password, hash)
                    .context("Failed to verify password")
                    .map_err(AuthError::Internal)?;

                if !verified {
                    return Err(AuthError::InvalidCredential);
                }
            }
            Credential::Otp(submitted) => {
                match storage::consume_latest_code(&self.pool, email, &submitted).await? {
                    ConsumeOutcome::Consumed => (),
                    ConsumeOutcome::Missing | ConsumeOutcome::Mismatch => {
                        return Err(AuthError::InvalidCredential);
                    }
                    ConsumeOutcome::Expired => return Err(AuthError::ExpiredOtp),
                }
            }
        }

        debug!(user_id = %user.id, "login verified");

        Ok(self.signer.issue(user.id, &user.email)?)
    }
}
