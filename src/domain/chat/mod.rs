pub mod error;
pub mod service;

pub use error::ChatServiceError;
pub use service::{ChatService, ChatServiceApi};

use crate::infrastructure::chat::{ChatMessage, UpstreamChoice, UpstreamUsage};
use serde::{Deserialize, Serialize};

/// Defaults applied when the caller leaves the tuning fields out.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.9;
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Request for POST /api/chat
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Response for POST /api/chat, mirroring the upstream shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<UpstreamChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UpstreamUsage>,
}
