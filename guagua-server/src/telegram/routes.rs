//! Webhook route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::answer::compose_answer;
use crate::parser::stop_id_from_message;

use super::state::AppState;
use super::types::Update;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(webhook))
        .route("/health", get(health))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Telegram webhook endpoint.
///
/// Updates without a usable chat id are acknowledged and dropped so
/// Telegram does not redeliver them. A malformed provider line entry
/// or a failed outbound send returns 500, which makes Telegram retry
/// the update later.
async fn webhook(State(state): State<AppState>, Json(update): Json<Update>) -> StatusCode {
    let Some(message) = update.message else {
        return StatusCode::OK;
    };
    let Some(chat) = message.chat else {
        tracing::warn!("dropping update without chat id");
        return StatusCode::OK;
    };

    let text = message.text.unwrap_or_default();
    let stop_id = stop_id_from_message(&text);

    let answer = match compose_answer(&state.api, stop_id).await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::error!(chat_id = chat.id, error = %e, "unusable provider data");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    if let Err(e) = state.bot.send_message(chat.id, &answer.into_text()).await {
        tracing::error!(chat_id = chat.id, error = %e, "failed to send reply");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
