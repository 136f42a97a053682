//! # Aliro (Dual-mode Authentication Service)
//!
//! `aliro` is an authentication authority with two credential modes: a user
//! may register and log in either with a password or with a one-time passcode
//! (OTP) delivered out-of-band by email.
//!
//! ## Credential modes
//!
//! - **Password:** stored as a salted bcrypt hash; the plaintext never touches
//!   the database or the logs.
//! - **OTP:** a 6-digit numeric code with a 5 minute lifetime, strictly
//!   single-use. Issuing a new code purges the previous ones for that email;
//!   when stale codes survive an issuance race, the most recently created code
//!   is the only one that verifies.
//!
//! ## Session tokens
//!
//! Successful registration or login yields an HMAC-signed session token
//! (1 hour validity) carrying the user id and email. This service only signs
//! tokens; verification is the consumer's responsibility.
//!
//! ## Enumeration resistance
//!
//! Login failures for an unknown email and for a wrong credential return the
//! same status and message so that callers cannot probe which accounts exist.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
