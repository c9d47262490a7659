//! Decoded form of the status-change webhook sent by the uptime monitor.
//!
//! Decoding is lenient: unknown fields are ignored, missing fields fall back
//! to their defaults and `null` is treated the same as absent. A body that is
//! not JSON, or a declared field carrying the wrong JSON type, is rejected.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("missing monitor name")]
    MissingMonitorName,
}

/// One heartbeat result as reported by the monitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heartbeat {
    #[serde(rename = "monitorID")]
    pub monitor_id: Option<i64>,
    /// `0` means down, anything else is reported as up.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,
    pub time: Option<String>,
    pub msg: Option<String>,
    pub important: Option<bool>,
    pub duration: Option<i64>,
}

/// The monitor definition attached to every heartbeat.
///
/// Only `name` and `description` feed the notification; the rest is declared
/// so that malformed values are still caught while decoding. Every field keeps
/// the wire type of the relay's original payload schema, so `port` is a string
/// and `tags` a list of strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorInfo {
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub url: Option<String>,
    pub method: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    #[serde(rename = "maxretries")]
    pub max_retries: Option<i64>,
    pub weight: Option<i64>,
    pub active: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub interval: Option<i64>,
    pub retry_interval: Option<i64>,
    pub resend_interval: Option<i64>,
    pub keyword: Option<String>,
    pub expiry_notification: Option<bool>,
    pub ignore_tls: Option<bool>,
    pub upside_down: Option<bool>,
    pub packet_size: Option<i64>,
    #[serde(rename = "maxredirects")]
    pub max_redirects: Option<i64>,
    #[serde(rename = "accepted_statuscodes")]
    pub accepted_status_codes: Option<Vec<String>>,
    #[serde(rename = "dns_resolve_type")]
    pub dns_resolve_type: Option<String>,
    #[serde(rename = "dns_resolve_server")]
    pub dns_resolve_server: Option<String>,
    #[serde(rename = "dns_last_result")]
    pub dns_last_result: Option<String>,
    #[serde(rename = "docker_container")]
    pub docker_container: Option<String>,
    #[serde(rename = "docker_host")]
    pub docker_host: Option<String>,
    pub proxy_id: Option<String>,
    #[serde(rename = "notificationIDList")]
    pub notification_id_list: Option<HashMap<String, bool>>,
    pub tags: Option<Vec<String>>,
    pub maintenance: Option<bool>,
    pub mqtt_topic: Option<String>,
    pub mqtt_success_message: Option<String>,
    pub database_query: Option<String>,
    pub auth_method: Option<HashMap<String, String>>,
    pub grpc_url: Option<String>,
    pub grpc_protobuf: Option<String>,
    pub grpc_method: Option<String>,
    pub grpc_service_name: Option<String>,
    pub grpc_enable_tls: Option<bool>,
    pub radius_called_station_id: Option<String>,
    pub radius_calling_station_id: Option<String>,
    pub game: Option<String>,
}

/// A single inbound status event. Lives for one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub heartbeat: Heartbeat,
    #[serde(default, deserialize_with = "null_as_default")]
    pub monitor: MonitorInfo,
    pub msg: Option<String>,
}

impl StatusEvent {
    /// Decode a raw request body and check it carries a monitor name.
    pub fn from_slice(body: &[u8]) -> Result<Self, EventError> {
        let event: StatusEvent = serde_json::from_slice(body)?;
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), EventError> {
        if self.monitor.name.is_empty() {
            return Err(EventError::MissingMonitorName);
        }
        Ok(())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
