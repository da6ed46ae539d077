use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PostServiceError {
    #[error("게시글을 찾을 수 없습니다.")]
    NotFound,

    #[error("게시글을 불러오는 중 오류가 발생했습니다.")]
    Dependency(String),
}

impl From<PostServiceError> for AppError {
    fn from(err: PostServiceError) -> Self {
        match err {
            PostServiceError::NotFound => AppError::NotFound(err.to_string()),
            PostServiceError::Dependency(_) => AppError::Internal(err.to_string()),
        }
    }
}
