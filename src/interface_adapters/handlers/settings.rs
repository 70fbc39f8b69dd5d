use crate::interface_adapters::protocol::SettingsStatusResponse;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{SettingsSubmission, save_settings};
use axum::{
    Json,
    body::to_bytes,
    extract::{Request, State},
    http::Method,
};
use std::sync::Arc;
use uuid::Uuid;

// Accept a settings submission from the client. Every outcome is reported
// with 200 and a status envelope; nothing is stored.
pub async fn save_settings_handler(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Json<SettingsStatusResponse> {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();

    // Only POST bodies are buffered; other methods never touch the body.
    let body = if method == Method::POST {
        Some(to_bytes(request.into_body(), state.max_body_bytes).await)
    } else {
        None
    };

    let submission = match &body {
        Some(Ok(bytes)) => SettingsSubmission::Post(&bytes[..]),
        Some(Err(error)) => SettingsSubmission::PostUnreadable(error.to_string()),
        None => SettingsSubmission::OtherMethod,
    };

    match save_settings(submission) {
        Ok(payload) => {
            tracing::info!(%request_id, kind = payload.kind(), "settings accepted");
            Json(SettingsStatusResponse::success())
        }
        Err(error) => {
            tracing::warn!(%request_id, %method, %error, "settings rejected");
            Json(SettingsStatusResponse::error(error.to_string()))
        }
    }
}
