pub mod gateway;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::sync::Arc;

use super::LlmConfig;
use self::gateway::GatewayChatClient;
use crate::models::chat::Message;
use crate::relay::error::RelayError;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the full transcript and returns the first completion's text.
    async fn complete(&self, messages: &[Message]) -> Result<String, RelayError>;

    fn get_model(&self) -> String;
    fn get_base_url(&self) -> String;
}

pub fn new_client(config: &LlmConfig, http: HttpClient) -> Result<Arc<dyn ChatClient>, RelayError> {
    let client = GatewayChatClient::from_config(config, http)?;
    Ok(Arc::new(client))
}
