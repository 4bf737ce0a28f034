//! Axum route handler for the ideation chat.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::llm_client::prompts::CONTENT_ENGINE_SYSTEM;
use crate::llm_client::{ChatMessage, ChatRole};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

/// Prepends the default system prompt when the conversation has none.
pub fn with_default_system(messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    if messages.iter().any(|m| m.role == ChatRole::System) {
        return messages;
    }
    let mut out = Vec::with_capacity(messages.len() + 1);
    out.push(ChatMessage::system(CONTENT_ENGINE_SYSTEM));
    out.extend(messages);
    out
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.messages.is_empty() {
        return Err(AppError::Validation("messages cannot be empty".to_string()));
    }
    if !request.messages.iter().any(|m| m.role == ChatRole::User) {
        return Err(AppError::Validation(
            "messages must contain at least one user message".to_string(),
        ));
    }

    let llm = state.llm()?;
    let messages = with_default_system(request.messages);
    info!("Chat request with {} messages", messages.len());

    let text = llm.complete(&messages).await?;
    Ok(Json(ChatResponse { text }))
}
