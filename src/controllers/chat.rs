use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::chat::{ChatRequest, ChatResponse, ChatService, ChatServiceApi};
use crate::error::AppResult;

pub struct ChatController {
    chat_service: Arc<ChatService>,
}

impl ChatController {
    pub fn new(chat_service: Arc<ChatService>) -> Self {
        Self { chat_service }
    }

    /// POST /api/chat - Forward a completion request to the upstream
    pub async fn complete(
        State(controller): State<Arc<ChatController>>,
        Json(request): Json<ChatRequest>,
    ) -> AppResult<Json<ChatResponse>> {
        let response = controller.chat_service.complete(request).await?;
        Ok(Json(response))
    }

    /// GET /api/chat - Liveness probe for the proxy
    pub async fn status() -> impl IntoResponse {
        Json(json!({
            "status": "ok",
            "message": "챗봇 프록시 서버 정상 작동 중"
        }))
    }
}
