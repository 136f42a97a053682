//! Request and response payloads for the auth endpoints.

use super::error::AuthError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Accept the code as a JSON string or bare number, some clients send the
/// digits unquoted.
fn otp_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Otp {
        Text(String),
        Digits(u64),
    }

    Ok(Option::<Otp>::deserialize(deserializer)?.map(|otp| match otp {
        Otp::Text(text) => text,
        Otp::Digits(digits) => digits.to_string(),
    }))
}

/// Payload for `POST /api/auth/request-otp`.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RequestOtpRequest {
    pub email: String,
}

/// Payload for `POST /api/auth/register`.
#[derive(ToSchema, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "otp_from_string_or_number")]
    pub otp: Option<String>,
}

// Redact the password, payloads get logged at debug level.
impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("otp", &self.otp)
            .finish()
    }
}

/// Payload for `POST /api/auth/login`.
#[derive(ToSchema, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "otp_from_string_or_number")]
    pub otp: Option<String>,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("otp", &self.otp)
            .finish()
    }
}

/// Successful register/login response carrying the session token.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub message: String,
}

/// Generic message-only response body.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One of the two accepted credential modes.
#[derive(Debug)]
pub(super) enum Credential {
    Password(String),
    Otp(String),
}

impl Credential {
    /// Pick the credential from an optional password/otp pair.
    ///
    /// The password wins when both are present, matching the order clients
    /// are expected to fill the form in.
    pub(super) fn from_parts(
        password: Option<String>,
        otp: Option<String>,
    ) -> Result<Self, AuthError> {
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            return Ok(Self::Password(password));
        }

        if let Some(otp) = otp.filter(|o| !o.is_empty()) {
            return Ok(Self::Otp(otp));
        }

        Err(AuthError::Validation(
            "Email and password OR OTP are required",
        ))
    }
}
