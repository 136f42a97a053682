use crate::api::{
    self,
    handlers::auth::token::TokenSigner,
    notify::{HttpNotifier, LogNotifier, Notifier},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::info;
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub token_secret: SecretString,
    pub token_ttl_seconds: i64,
    pub otp_ttl_seconds: i64,
    pub notifier_url: Option<String>,
}

/// Execute the server action.
///
/// # Errors
/// Returns an error if configuration is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    // Validate the DSN shape before handing it to the pool.
    Url::parse(&args.dsn).context("Invalid database DSN")?;

    let signer = TokenSigner::new(&args.token_secret, args.token_ttl_seconds);

    let notifier: Arc<dyn Notifier> = match &args.notifier_url {
        Some(url) => {
            let endpoint = Url::parse(url).context("Invalid notifier URL")?;
            Arc::new(HttpNotifier::new(endpoint)?)
        }
        None => {
            info!("No notifier endpoint configured, one-time codes will be logged");
            Arc::new(LogNotifier)
        }
    };

    api::new(args.port, args.dsn, signer, notifier, args.otp_ttl_seconds).await
}
