//! Auth handlers and supporting modules.
//!
//! This module coordinates the two credential modes:
//!
//! - **Password:** hashed with bcrypt and stored on the user row.
//! - **One-time code:** a 6-digit code delivered out of band, valid for a
//!   short window and consumed on first use.
//!
//! Either mode ends in the same place, a signed session token minted by
//! [`token::TokenSigner`].
//!
//! ## One-time code policy
//!
//! Only the most recently issued code per email is honored. Issuing a new
//! code replaces any previous ones, and a successful login consumes every
//! code stored for that email.

mod authenticator;
mod error;
pub(crate) mod login;
mod otp;
pub(crate) mod register;
pub(crate) mod request_otp;
mod storage;
pub mod token;
pub(crate) mod types;
mod utils;

pub use authenticator::Authenticator;
pub use otp::OtpIssuer;
