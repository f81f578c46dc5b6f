use async_trait::async_trait;
use log::debug;
use reqwest::{ Client as HttpClient, StatusCode };
use thiserror::Error;

use crate::models::relay::{ ErrorKind, RelayRequest, RelayResponse };

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayFailure {
    /// The relay answered with an error body.
    #[error("{message}")]
    Relay {
        kind: ErrorKind,
        message: String,
    },

    /// The relay could not be reached, or its answer could not be decoded.
    #[error("Transport failure: {0}")]
    Transport(String),
}

#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(&self, request: &RelayRequest) -> Result<String, RelayFailure>;
}

pub struct RelayClient {
    http: HttpClient,
    url: String,
}

impl RelayClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Bodies from relays that predate the `kind` field are classified by status alone.
fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::TOO_MANY_REQUESTS => ErrorKind::RateLimited,
        StatusCode::PAYMENT_REQUIRED => ErrorKind::PaymentRequired,
        _ => ErrorKind::Internal,
    }
}

#[async_trait]
impl RelayTransport for RelayClient {
    async fn send(&self, request: &RelayRequest) -> Result<String, RelayFailure> {
        let resp = self.http
            .post(&self.url)
            .json(request)
            .send().await
            .map_err(|e| RelayFailure::Transport(e.to_string()))?;

        let status = resp.status();
        debug!("Relay responded with {}", status);

        let body = resp
            .json::<RelayResponse>().await
            .map_err(|e| RelayFailure::Transport(format!("Failed to decode relay response: {}", e)))?;

        match body {
            RelayResponse::Success { response } if status.is_success() => Ok(response),
            RelayResponse::Success { .. } =>
                Err(RelayFailure::Transport(format!("Relay returned {} without an error body", status))),
            RelayResponse::Failure { error, kind } =>
                Err(RelayFailure::Relay {
                    kind: kind.unwrap_or_else(|| kind_for_status(status)),
                    message: error,
                }),
        }
    }
}
