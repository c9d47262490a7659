mod discord;

pub use discord::DiscordForwarder;
pub use reqwest::Client as HttpClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::event::StatusEvent;

#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request never completed: DNS, connect, TLS, or an unusable URL.
    #[error("{reason}")]
    Transport { url: String, reason: String },
}

/// Delivers a validated status event to its destination.
///
/// Implementations make exactly one attempt per call. The trait is
/// object-safe and Send + Sync so a single instance can serve every request.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, event: &StatusEvent) -> Result<(), DeliveryError>;
}
