mod webhook;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

pub use webhook::MessageResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook", post(webhook::receive_webhook))
}
