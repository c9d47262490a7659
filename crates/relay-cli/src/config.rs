//! TOML configuration file schema and parsing.
//!
//! Example config file:
//!
//! ```toml
//! webhook_url = "https://discord.com/api/webhooks/123/abc"
//! bearer_token = "change-me"
//! uptime_url = "https://status.example.com"
//! prod = true
//! http_port = 8080
//! ```
//!
//! Every key is optional when parsing. Empty values are reported at startup
//! and surface as request failures once traffic arrives.

use std::path::Path;

use serde::Deserialize;

use relay_core::RelayConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub webhook_url: String,

    #[serde(default)]
    pub bearer_token: String,

    /// Status page linked from each notification.
    #[serde(default)]
    pub uptime_url: String,

    #[serde(default)]
    pub prod: bool,

    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

fn default_http_port() -> u16 {
    8080
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))
    }

    pub fn to_relay_config(&self) -> RelayConfig {
        RelayConfig::default()
            .with_webhook_url(&self.webhook_url)
            .with_bearer_token(&self.bearer_token)
            .with_status_page_url(&self.uptime_url)
            .with_prod(self.prod)
            .with_http_port(self.http_port)
    }
}
