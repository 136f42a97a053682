//! Delivery abstraction for one-time codes.
//!
//! The issuer awaits delivery inline before reporting success, so a slow or
//! failing notifier directly delays or fails the request. Implementations
//! decide how to deliver (SMTP gateway, API, etc.); the default for local dev
//! is `LogNotifier`, which logs and returns `Ok(())`.

use crate::APP_USER_AGENT;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde_json::json;
use tracing::info;
use url::Url;

/// Outbound delivery of a one-time code to an email address.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the code or return an error to fail the issuance.
    async fn deliver(&self, email: &str, code: &str) -> Result<()>;
}

/// Local dev notifier that logs the code instead of sending real email.
#[derive(Clone, Debug)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, email: &str, code: &str) -> Result<()> {
        info!(to_email = %email, code = %code, "one-time code delivery stub");
        Ok(())
    }
}

/// Notifier that posts the message to an HTTP mail gateway.
#[derive(Clone, Debug)]
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpNotifier {
    /// Build a notifier for the given gateway endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .context("Failed to build notifier HTTP client")?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn deliver(&self, email: &str, code: &str) -> Result<()> {
        let body = json!({
            "to": email,
            "subject": "Your OTP Code",
            "text": format!("Your OTP is {code}. It expires in 5 minutes."),
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .context("Failed to reach mail gateway")?;

        if !response.status().is_success() {
            bail!("mail gateway returned {}", response.status());
        }

        Ok(())
    }
}
