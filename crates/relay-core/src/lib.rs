#![forbid(unsafe_code)]

pub mod config;
pub mod embed;
pub mod event;
pub mod forwarder;
pub mod status;

pub use config::RelayConfig;
pub use embed::{DiscordEmbed, DiscordMessage};
pub use event::{EventError, Heartbeat, MonitorInfo, StatusEvent};
pub use forwarder::{DeliveryError, DiscordForwarder, Forwarder, HttpClient};
pub use status::PresentationStatus;
