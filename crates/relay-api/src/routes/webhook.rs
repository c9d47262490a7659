use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use relay_core::{EventError, PresentationStatus, RelayConfig, StatusEvent};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /webhook
///
/// The body is only decoded once the caller has authenticated.
pub(super) async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let delivery_id = Uuid::new_v4();

    authorize(&state.config, &headers).inspect_err(|_| {
        warn!(%delivery_id, "Rejected webhook with bad credentials");
    })?;

    let event = StatusEvent::from_slice(&body).map_err(|e| {
        match &e {
            EventError::Decode(_) => warn!(%delivery_id, error = %e, "Undecodable webhook body"),
            EventError::MissingMonitorName => warn!(%delivery_id, "Webhook without monitor name"),
        }
        ApiError::BadRequest(e.to_string())
    })?;

    let status = PresentationStatus::from_heartbeat(event.heartbeat.status);
    info!(
        %delivery_id,
        monitor = %event.monitor.name,
        heartbeat_status = event.heartbeat.status,
        %status,
        "Forwarding status change"
    );

    state
        .forwarder
        .forward(&event)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(MessageResponse {
        message: "Success".into(),
    }))
}

/// Any header that differs from `Bearer <token>` is unauthorized. A match
/// against an empty configured token is a configuration error instead.
fn authorize(config: &RelayConfig, headers: &HeaderMap) -> Result<(), ApiError> {
    let expected = format!("Bearer {}", config.bearer_token);
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if presented != Some(expected.as_str()) {
        return Err(ApiError::Unauthorized);
    }
    if config.bearer_token.is_empty() {
        return Err(ApiError::Internal("bearer token is not configured".into()));
    }
    Ok(())
}
