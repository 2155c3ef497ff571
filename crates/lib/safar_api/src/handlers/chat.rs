//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::debug;

use safar_core::assistant;
use safar_core::models::chat::ChatMessage;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Response body: the assistant's reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// `POST /api/chat` — send a conversation, get an assistant reply.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(req) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    if req.messages.is_empty() {
        return Err(AppError::Validation("No messages provided".into()));
    }

    debug!(turns = req.messages.len(), "chat request");

    let message = assistant::generate_reply(&state.assistant, &req.messages).await?;
    Ok(Json(ChatResponse { message }))
}
