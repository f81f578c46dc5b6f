use axum::{
    body::Bytes,
    extract::{ rejection::BytesRejection, DefaultBodyLimit, State },
    http::{ header::{ AUTHORIZATION, CONTENT_TYPE }, HeaderName, Method },
    routing::{ get, post },
    Json,
    Router,
};
use log::info;
use reqwest::Client as HttpClient;
use std::sync::Arc;
use tower_http::cors::{ Any, CorsLayer };

use super::error::RelayError;
use crate::config::RELAY_ROUTE;
use crate::llm::LlmConfig;
use crate::llm::chat::new_client;
use crate::models::chat::Message;
use crate::models::relay::{ RelayRequest, RelayResponse };

/// Largest transcript accepted in one request body.
pub const MAX_REQUEST_BYTES: usize = 2 * 1024 * 1024;

/// Read-only state shared by every invocation.
#[derive(Clone)]
pub struct RelayState {
    llm: LlmConfig,
    http: HttpClient,
    system_prompt: Arc<str>,
}

impl RelayState {
    pub fn new(llm: LlmConfig, system_prompt: impl Into<Arc<str>>) -> Self {
        Self {
            llm,
            http: HttpClient::new(),
            system_prompt: system_prompt.into(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.llm.api_key.is_some()
    }
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

/// The CORS layer answers every OPTIONS request itself, so preflights never reach a handler.
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(RELAY_ROUTE, post(career_chat_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(cors_layer())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn career_chat_handler(
    State(state): State<RelayState>,
    body: Result<Bytes, BytesRejection>
) -> Result<Json<RelayResponse>, RelayError> {
    // Oversized or unreadable bodies still answer with a JSON error body.
    let body = body.map_err(|e| RelayError::InvalidRequest(e.to_string()))?;
    let request: RelayRequest = serde_json
        ::from_slice(&body)
        .map_err(|e| RelayError::InvalidRequest(e.to_string()))?;

    let client = new_client(&state.llm, state.http.clone())?;

    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    messages.push(Message::system(&*state.system_prompt));
    messages.extend(request.messages);

    info!(
        "Forwarding {} message(s) to AI gateway: Model={}, URL={}",
        messages.len(),
        client.get_model(),
        client.get_base_url()
    );

    let response = client.complete(&messages).await?;
    Ok(Json(RelayResponse::Success { response }))
}
