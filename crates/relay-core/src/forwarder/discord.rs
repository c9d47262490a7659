use std::error::Error as _;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::{DeliveryError, Forwarder};
use crate::config::RelayConfig;
use crate::embed::DiscordMessage;
use crate::event::StatusEvent;

/// Posts status events to a chat webhook as a rich embed.
///
/// One POST per event: no retry, no backoff, and no timeout beyond the
/// client's own. Any HTTP response counts as delivered.
#[derive(Debug, Clone)]
pub struct DiscordForwarder {
    client: Client,
    webhook_url: String,
    status_page_url: String,
}

impl DiscordForwarder {
    pub fn new(
        client: Client,
        webhook_url: impl Into<String>,
        status_page_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
            status_page_url: status_page_url.into(),
        }
    }

    pub fn from_config(config: &RelayConfig, client: Client) -> Self {
        Self::new(client, &config.webhook_url, &config.status_page_url)
    }

    pub fn build_client() -> reqwest::Result<Client> {
        Client::builder()
            .user_agent(concat!("uptime-relay/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}

#[async_trait]
impl Forwarder for DiscordForwarder {
    async fn forward(&self, event: &StatusEvent) -> Result<(), DeliveryError> {
        let message = DiscordMessage::for_event(event, &self.status_page_url);
        let title = message.embeds[0].title.as_str();
        debug!(url = %self.webhook_url, title, "Posting notification");

        let response = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.webhook_url, error = %e, "Notification delivery failed");
                DeliveryError::Transport {
                    url: self.webhook_url.clone(),
                    reason: error_chain(&e),
                }
            })?;

        let status = response.status();
        if status.is_success() {
            info!(title, status = status.as_u16(), "Notification delivered");
        } else {
            warn!(title, status = status.as_u16(), "Webhook answered with non-success status");
        }

        Ok(())
    }
}

/// Join an error and its sources, since reqwest keeps the root cause
/// (connection refused, DNS failure) out of its own message.
fn error_chain(err: &reqwest::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn event(status: i64, name: &str) -> StatusEvent {
        let mut e = StatusEvent::default();
        e.heartbeat.status = status;
        e.monitor.name = name.to_string();
        e.monitor.description = "main api".to_string();
        e
    }

    fn forwarder(url: String) -> DiscordForwarder {
        DiscordForwarder::new(
            DiscordForwarder::build_client().unwrap(),
            url,
            "https://status.example.com",
        )
    }

    fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}/hook", port)
    }

    #[tokio::test]
    async fn posts_embed_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        forwarder(format!("{}/hook", server.uri()))
            .forward(&event(0, "API"))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["content"], "");
        assert_eq!(body["embeds"][0]["type"], "rich");
        assert_eq!(body["embeds"][0]["title"], "API is Down");
        assert_eq!(body["embeds"][0]["description"], "main api");
        assert_eq!(body["embeds"][0]["color"], 16711680);
        assert_eq!(body["embeds"][0]["url"], "https://status.example.com");
    }

    #[tokio::test]
    async fn destination_error_status_still_counts_as_delivered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = forwarder(format!("{}/hook", server.uri()))
            .forward(&event(1, "API"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unreachable_destination_is_a_transport_error() {
        let url = unreachable_url();
        let err = forwarder(url.clone())
            .forward(&event(1, "API"))
            .await
            .unwrap_err();
        let DeliveryError::Transport { url: failed, reason } = err;
        assert_eq!(failed, url);
        assert!(!reason.is_empty());
    }

    #[tokio::test]
    async fn empty_webhook_url_fails_at_first_use() {
        let err = forwarder(String::new())
            .forward(&event(1, "API"))
            .await
            .unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
