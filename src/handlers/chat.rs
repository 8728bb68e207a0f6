use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::ai::agent;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// POST /api/chat
pub async fn chat(State(state): State<Arc<AppState>>, Json(payload): Json<ChatRequest>) -> Response {
    let message = payload.message.trim();
    if message.is_empty() {
        return AppError::BadRequest("message cannot be empty".to_string()).into_response();
    }

    tracing::info!(message, "incoming chat message");

    match agent::run_agent(&state, message).await {
        Ok(reply) => Json(ChatResponse {
            reply,
            success: true,
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "chat request failed");
            Json(ChatResponse {
                reply: "Sorry, something went wrong. Please try again.".to_string(),
                success: false,
                error: Some(e.to_string()),
            })
            .into_response()
        }
    }
}
