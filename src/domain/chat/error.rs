use crate::error::AppError;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("messages 필드가 필요합니다.")]
    MissingMessages,

    #[error("OPENAI_API_KEY가 설정되지 않았습니다.")]
    MissingApiKey,

    /// Upstream answered with a non-success status.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// The upstream could not be reached at all.
    #[error("인터넷 연결을 확인해주세요. 네트워크 상태를 확인하고 다시 시도해주세요.")]
    Network(#[source] reqwest::Error),
}

impl From<ChatServiceError> for AppError {
    fn from(err: ChatServiceError) -> Self {
        match err {
            ChatServiceError::MissingMessages => AppError::BadRequest(err.to_string()),
            ChatServiceError::MissingApiKey => AppError::Internal(err.to_string()),
            ChatServiceError::Upstream { status, ref message } => match status {
                StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded(message.clone()),
                _ => AppError::ExternalService(message.clone()),
            },
            ChatServiceError::Network(_) => AppError::ExternalService(err.to_string()),
        }
    }
}
