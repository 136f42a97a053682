//! Error taxonomy for the auth flows.
//!
//! Domain errors map to 400 with a stable client message. Infrastructure
//! errors map to 500 and hide their detail behind a per-endpoint fallback
//! message while the full error is logged server side.

use super::types::MessageResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub(super) enum AuthError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("user already exists")]
    Conflict,

    #[error("invalid one-time code")]
    InvalidOtp,

    #[error("expired one-time code")]
    ExpiredOtp,

    #[error("invalid credentials")]
    InvalidCredential,

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("delivery error: {0}")]
    Delivery(#[source] anyhow::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub(super) const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Conflict
            | Self::InvalidOtp
            | Self::ExpiredOtp
            | Self::InvalidCredential => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Delivery(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show the client, `fallback` covers the 500 class.
    pub(super) fn client_message(&self, fallback: &'static str) -> &'static str {
        match self {
            Self::Validation(message) => message,
            Self::Conflict => "User already exists",
            Self::InvalidOtp => "Invalid OTP",
            Self::ExpiredOtp => "OTP expired",
            Self::InvalidCredential => "Invalid credentials",
            Self::Storage(_) | Self::Delivery(_) | Self::Internal(_) => fallback,
        }
    }
}

/// Convert an error into the response for one endpoint, logging it first.
pub(super) fn respond(err: &AuthError, fallback: &'static str) -> Response {
    let status = err.status();

    if status.is_server_error() {
        error!("{:?}", err);
    } else {
        debug!("{:?}", err);
    }

    (
        status,
        Json(MessageResponse::new(err.client_message(fallback))),
    )
        .into_response()
}
