pub mod api;
pub mod error;

use std::error::Error;
use std::net::SocketAddr;
use log::{ info, warn, error };

use self::api::{ router, RelayState };
use crate::cli::RelayArgs;

pub struct Server {
    addr: String,
    state: RelayState,
    tls: Option<(String, String)>,
}

impl Server {
    pub fn new(addr: String, state: RelayState, args: &RelayArgs) -> Result<Self, Box<dyn Error + Send + Sync>> {
        if state.has_credential() {
            info!("Relay configured with an AI gateway credential.");
        } else {
            warn!("LOVABLE_API_KEY is not set. Every chat request will fail with a configuration error.");
        }

        let tls = if args.enable_tls {
            match (&args.tls_cert_path, &args.tls_key_path) {
                (Some(cert), Some(key)) => Some((cert.clone(), key.clone())),
                (Some(_), None) | (None, Some(_)) => {
                    error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
                    return Err("Missing TLS certificate or key path".into());
                }
                (None, None) => {
                    error!("--enable-tls was set but no certificate/key paths provided.");
                    return Err("TLS enabled without cert/key".into());
                }
            }
        } else {
            None
        };

        Ok(Self { addr, state, tls })
    }

    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let addr = self.addr.parse::<SocketAddr>()?;
        let app = router(self.state);

        match self.tls {
            Some((cert_path, key_path)) => {
                info!(
                    "TLS enabled. Loading certificate from '{}' and key from '{}'",
                    cert_path,
                    key_path
                );
                let tls_config = axum_server::tls_rustls::RustlsConfig
                    ::from_pem_file(&cert_path, &key_path).await?;
                info!("Relay listening on: https://{}", addr);
                axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service()).await?;
            }
            None => {
                let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
                    error!("Failed to bind relay to {}: {}. Try a different port.", addr, e);
                    e
                })?;
                info!("Relay listening on: http://{}", addr);
                axum::serve(listener, app.into_make_service()).await?;
            }
        }

        Ok(())
    }
}
