pub mod chat;

use crate::config::{ DEFAULT_GATEWAY_MODEL, DEFAULT_GATEWAY_URL };

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub completion_model: String,
    pub base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            completion_model: DEFAULT_GATEWAY_MODEL.to_string(),
            base_url: DEFAULT_GATEWAY_URL.to_string(),
        }
    }
}

impl LlmConfig {
    pub fn new(api_key: Option<String>, model: Option<String>, base_url: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            completion_model: model.unwrap_or(defaults.completion_model),
            base_url: base_url.unwrap_or(defaults.base_url),
        }
    }
}
