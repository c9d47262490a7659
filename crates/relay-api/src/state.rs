use std::sync::Arc;

use relay_core::{DiscordForwarder, Forwarder, HttpClient, RelayConfig};

/// Shared, read-only request context.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub forwarder: Arc<dyn Forwarder>,
}

impl AppState {
    pub fn new(config: RelayConfig, forwarder: Arc<dyn Forwarder>) -> Self {
        Self {
            config: Arc::new(config),
            forwarder,
        }
    }

    /// State that forwards to the chat webhook named in `config`.
    pub fn with_discord(config: RelayConfig, client: HttpClient) -> Self {
        let forwarder = Arc::new(DiscordForwarder::from_config(&config, client));
        Self::new(config, forwarder)
    }
}
