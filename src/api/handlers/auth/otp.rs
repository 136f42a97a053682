//! One-time code issuance.

use super::{error::AuthError, storage};
use crate::api::notify::Notifier;
use rand::Rng;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

/// 6 digits, no leading zero.
fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Issues one-time codes and hands them to the notifier.
#[derive(Clone)]
pub struct OtpIssuer {
    pool: PgPool,
    notifier: Arc<dyn Notifier>,
    ttl_seconds: i64,
}

impl OtpIssuer {
    #[must_use]
    pub fn new(pool: PgPool, notifier: Arc<dyn Notifier>, ttl_seconds: i64) -> Self {
        Self {
            pool,
            notifier,
            ttl_seconds,
        }
    }

    /// Generate a fresh code for `email`, store it, and deliver it.
    ///
    /// Storing replaces any previous codes for the email, so only the newest
    /// code is ever honored. Delivery is awaited inline, if it fails the
    /// request fails even though the code is already stored, the next
    /// issuance replaces it.
    pub(super) async fn issue(&self, email: &str) -> Result<(), AuthError> {
        let code = generate_code();

        storage::replace_code(&self.pool, email, &code, self.ttl_seconds).await?;

        debug!(to_email = %email, "one-time code stored, delivering");

        self.notifier
            .deliver(email, &code)
            .await
            .map_err(AuthError::Delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_six_digits_without_leading_zero() {
        for _ in 0..1000 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(code.as_bytes()[0], b'0');
        }
    }

    #[test]
    fn codes_vary() {
        let first = generate_code();
        let mut saw_different = false;
        for _ in 0..50 {
            if generate_code() != first {
                saw_different = true;
                break;
            }
        }
        assert!(saw_different);
    }
}
