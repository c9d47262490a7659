use serde::{Deserialize, Serialize};

/// Runtime settings for the relay. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Chat webhook that receives the formatted notification.
    pub webhook_url: String,
    /// Shared secret expected as `Authorization: Bearer <token>`.
    pub bearer_token: String,
    /// Public status page linked from every notification.
    pub status_page_url: String,
    /// Production mode: JSON logs at `info` instead of readable logs at `debug`.
    pub prod: bool,
    pub http_port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            bearer_token: String::new(),
            status_page_url: String::new(),
            prod: false,
            http_port: 8080,
        }
    }
}

impl RelayConfig {
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = url.into();
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = token.into();
        self
    }

    pub fn with_status_page_url(mut self, url: impl Into<String>) -> Self {
        self.status_page_url = url.into();
        self
    }

    pub fn with_prod(mut self, prod: bool) -> Self {
        self.prod = prod;
        self
    }

    pub fn with_http_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    /// Describe settings that will make requests fail once traffic arrives.
    ///
    /// Nothing here stops the relay from starting.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();

        if self.bearer_token.is_empty() {
            out.push("bearer_token is empty, every request will be refused".to_string());
        }

        for (key, value) in [
            ("webhook_url", &self.webhook_url),
            ("uptime_url", &self.status_page_url),
        ] {
            if value.is_empty() {
                out.push(format!("{} is empty", key));
            } else if !is_http_url(value) {
                out.push(format!("{} is not an http(s) URL: {}", key, value));
            }
        }

        out
    }
}

fn is_http_url(s: &str) -> bool {
    url::Url::parse(s)
        .map(|u| u.scheme() == "http" || u.scheme() == "https")
        .unwrap_or(false)
}
