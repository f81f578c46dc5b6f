use clap::Parser;

/// Chat relay: forwards CareerCraft conversations to the hosted AI gateway.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct RelayArgs {
    /// Host address and port for the relay to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    // --- AI Gateway Args ---
    /// Bearer credential for the AI gateway. The relay starts without it but answers every chat request with a configuration error.
    #[arg(long, env = "LOVABLE_API_KEY", hide_env_values = true)]
    pub gateway_api_key: Option<String>,

    /// Chat-completion endpoint of the AI gateway.
    #[arg(long, env = "GATEWAY_URL")] // No default, LlmConfig supplies it
    pub gateway_url: Option<String>,

    /// Model identifier sent with every completion request.
    #[arg(long, env = "GATEWAY_MODEL")]
    pub gateway_model: Option<String>,

    /// Optional file whose contents replace the built-in CareerCraft system prompt.
    #[arg(long, env = "SYSTEM_PROMPT_PATH")]
    pub system_prompt_path: Option<String>,

    // --- TLS Args ---
    /// Optional path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}

/// Terminal front-end for the CareerCraft relay.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ChatArgs {
    /// Full URL of the relay's chat endpoint.
    #[arg(long, env = "RELAY_URL", default_value = "http://127.0.0.1:4000/career-chat")]
    pub relay_url: String,

    /// Start with an empty conversation instead of the CareerCraft greeting.
    #[arg(long, default_value = "false")]
    pub no_greeting: bool,
}
