//! Chat webhook message body.
//!
//! Serialises to the rich-embed shape the chat platform accepts:
//!
//! ```json
//! {"content": "", "embeds": [{"type": "rich", "title": "API is Down",
//!   "description": "main api", "color": 16711680, "url": "https://status.example.com"}]}
//! ```

use serde::Serialize;

use crate::event::StatusEvent;
use crate::status::PresentationStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordEmbed {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub color: u32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordMessage {
    pub content: String,
    pub embeds: Vec<DiscordEmbed>,
}

impl DiscordMessage {
    /// Build the single-embed message announcing `event`, linking to the status page.
    pub fn for_event(event: &StatusEvent, status_page_url: &str) -> Self {
        let status = PresentationStatus::from_heartbeat(event.heartbeat.status);
        let embed = DiscordEmbed {
            kind: "rich".to_string(),
            title: format!("{} is {}", event.monitor.name, status),
            description: event.monitor.description.clone(),
            color: status.color(),
            url: status_page_url.to_string(),
        };

        Self {
            content: String::new(),
            embeds: vec![embed],
        }
    }
}
