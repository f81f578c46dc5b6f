use axum::{ http::StatusCode, response::{ IntoResponse, Response }, Json };
use log::error;
use thiserror::Error;

use crate::models::relay::{ ErrorKind, RelayResponse };

pub const RATE_LIMIT_MESSAGE: &str = "Rate limits exceeded, please try again later.";
pub const PAYMENT_REQUIRED_MESSAGE: &str =
    "Payment required, please add funds to your Lovable AI workspace.";
pub const GATEWAY_ERROR_MESSAGE: &str = "AI gateway error";
pub const CONFIG_ERROR_MESSAGE: &str = "AI gateway is not configured";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("AI gateway rate limit exceeded")]
    RateLimited,

    #[error("AI gateway requires payment")]
    PaymentRequired,

    #[error("AI gateway returned {status}: {body}")]
    Upstream {
        status: u16,
        body: String,
    },

    #[error("Failed to reach AI gateway: {0}")]
    Transport(String),

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Malformed AI gateway response: {0}")]
    MalformedUpstream(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RelayError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::Config(_) => ErrorKind::Config,
            RelayError::RateLimited => ErrorKind::RateLimited,
            RelayError::PaymentRequired => ErrorKind::PaymentRequired,
            RelayError::Upstream { .. } => ErrorKind::Upstream,
            | RelayError::Transport(_)
            | RelayError::InvalidRequest(_)
            | RelayError::MalformedUpstream(_) => ErrorKind::Internal,
        }
    }

    /// Text sent back to the caller. Only the rate-limit and payment messages
    /// carry upstream meaning; config and gateway detail stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            RelayError::Config(_) => CONFIG_ERROR_MESSAGE.to_string(),
            RelayError::RateLimited => RATE_LIMIT_MESSAGE.to_string(),
            RelayError::PaymentRequired => PAYMENT_REQUIRED_MESSAGE.to_string(),
            RelayError::Upstream { .. } => GATEWAY_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::RateLimited | RelayError::PaymentRequired => {}
            other => error!("Error in career-chat relay: {}", other),
        }

        let body = RelayResponse::Failure {
            error: self.client_message(),
            kind: Some(self.kind()),
        };
        (self.status(), Json(body)).into_response()
    }
}
