pub mod cli;
pub mod client;
pub mod config;
pub mod llm;
pub mod models;
pub mod relay;

use cli::RelayArgs;
use config::prompt::resolve_system_prompt;
use llm::LlmConfig;
use log::info;
use relay::Server;
use relay::api::RelayState;
use std::error::Error;

pub async fn run(args: RelayArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let llm_config = LlmConfig::new(
        args.gateway_api_key.clone(),
        args.gateway_model.clone(),
        args.gateway_url.clone()
    );
    let system_prompt = resolve_system_prompt(args.system_prompt_path.as_deref())?;

    info!("--- Relay Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Gateway URL: {}", llm_config.base_url);
    info!("Gateway Model: {}", llm_config.completion_model);
    info!("Gateway Credential: {}", if llm_config.api_key.is_some() { "set" } else { "missing" });
    info!(
        "System Prompt: {}",
        args.system_prompt_path.as_deref().unwrap_or("built-in CareerCraft persona")
    );
    info!("TLS Enabled: {}", args.enable_tls);
    info!("---------------------------");

    let state = RelayState::new(llm_config, system_prompt);
    let server = Server::new(args.server_addr.clone(), state, &args)?;
    server.run().await?;

    Ok(())
}
