use super::error::ChatServiceError;
use super::{ChatRequest, ChatResponse, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::infrastructure::chat::{ChatUpstreamClient, UpstreamResponse};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;

/// Proxy to the third-party completion endpoint. Pass-through by design:
/// the only logic here is input validation, default filling, and turning
/// upstream failures into user-readable messages.
pub struct ChatService {
    upstream: Option<Arc<ChatUpstreamClient>>,
}

impl ChatService {
    /// `upstream` is `None` when no API key is configured; requests then
    /// fail with the configuration message instead of a crash.
    pub fn new(upstream: Option<Arc<ChatUpstreamClient>>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
pub trait ChatServiceApi: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ChatServiceError>;
}

#[async_trait]
impl ChatServiceApi for ChatService {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ChatServiceError> {
        if request.messages.is_empty() {
            return Err(ChatServiceError::MissingMessages);
        }

        let upstream = self.upstream.as_ref().ok_or(ChatServiceError::MissingApiKey)?;

        let model = request.model.as_deref().unwrap_or(DEFAULT_MODEL);
        let temperature = request.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        let max_tokens = request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);

        tracing::info!(
            model = %model,
            message_count = request.messages.len(),
            "Forwarding chat completion"
        );

        let response = upstream
            .complete(model, &request.messages, temperature, max_tokens)
            .await
            .map_err(|e| {
                if e.is_decode() {
                    // reachable but talking nonsense: not a network problem
                    ChatServiceError::Upstream {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        message: user_message(StatusCode::INTERNAL_SERVER_ERROR),
                    }
                } else {
                    ChatServiceError::Network(e)
                }
            })?;

        match response {
            UpstreamResponse::Success(completion) => Ok(ChatResponse {
                choices: completion.choices,
                usage: completion.usage,
            }),
            UpstreamResponse::Failure { status, body } => {
                tracing::warn!(
                    status = %status.as_u16(),
                    body = %body,
                    "Chat upstream returned an error"
                );
                Err(ChatServiceError::Upstream {
                    status,
                    message: user_message(status),
                })
            }
        }
    }
}

/// Pick the localized message for an upstream status. 401, 429 and 500 each
/// get their own wording; everything else shares the generic one.
fn user_message(status: StatusCode) -> String {
    match status {
        StatusCode::UNAUTHORIZED => "서버 설정에 문제가 있습니다. 관리자에게 문의해주세요.",
        StatusCode::TOO_MANY_REQUESTS => "요청이 너무 많습니다. 잠시 후 다시 시도해주세요.",
        StatusCode::INTERNAL_SERVER_ERROR => "서버에 문제가 생겼습니다. 잠시 후 다시 시도해주세요.",
        _ => "알 수 없는 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
    }
    .to_string()
}
