use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client as HttpClient,
    StatusCode,
    header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION },
};
use serde::{ Deserialize, Serialize };

use super::ChatClient;
use crate::llm::LlmConfig;
use crate::models::chat::Message;
use crate::relay::error::RelayError;

/// OpenAI-compatible chat-completion client for the hosted AI gateway.
pub struct GatewayChatClient {
    http: HttpClient,
    headers: HeaderMap,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct GatewayRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    choices: Vec<GatewayChoice>,
}

#[derive(Deserialize)]
struct GatewayChoice {
    message: GatewayMessage,
}

#[derive(Deserialize)]
struct GatewayMessage {
    content: Option<String>,
}

impl GatewayChatClient {
    pub fn new(
        http: HttpClient,
        api_key: &str,
        model: String,
        base_url: String
    ) -> Result<Self, RelayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e|
                RelayError::Config(format!("Invalid API key format: {}", e))
            )?
        );

        Ok(Self { http, headers, model, base_url })
    }

    pub fn from_config(config: &LlmConfig, http: HttpClient) -> Result<Self, RelayError> {
        let api_key = config.api_key
            .as_deref()
            .ok_or_else(|| RelayError::Config("LOVABLE_API_KEY is not configured".to_string()))?;

        Self::new(http, api_key, config.completion_model.clone(), config.base_url.clone())
    }
}

#[async_trait]
impl ChatClient for GatewayChatClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, RelayError> {
        let req = GatewayRequest {
            model: &self.model,
            messages,
        };

        let resp = self.http
            .post(&self.base_url)
            .headers(self.headers.clone())
            .json(&req)
            .send().await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = resp.status();
        debug!("AI gateway responded with {}", status);

        if !status.is_success() {
            return match status {
                StatusCode::TOO_MANY_REQUESTS => Err(RelayError::RateLimited),
                StatusCode::PAYMENT_REQUIRED => Err(RelayError::PaymentRequired),
                _ => {
                    let body = resp.text().await.unwrap_or_default();
                    Err(RelayError::Upstream { status: status.as_u16(), body })
                }
            };
        }

        let body = resp
            .json::<GatewayResponse>().await
            .map_err(|e| RelayError::MalformedUpstream(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| RelayError::MalformedUpstream("No response from AI gateway".to_string()))
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }

    fn get_base_url(&self) -> String {
        self.base_url.clone()
    }
}
