use axum::{extract::{Query, State}, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::post::{PostDetailResponse, PostService, PostServiceApi, PostSummary};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    #[serde(default)]
    pub id: Option<String>,
}

pub struct PostController {
    post_service: Arc<PostService>,
}

impl PostController {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self { post_service }
    }

    /// GET /api/post?id=.. - Post detail
    pub async fn get_post(
        State(controller): State<Arc<PostController>>,
        Query(query): Query<DetailQuery>,
    ) -> AppResult<Json<PostDetailResponse>> {
        let id = parse_id(query)?;
        let detail = controller.post_service.get(id).await?;
        Ok(Json(detail))
    }

    /// GET /api/post/related?id=.. - Other posts in the same category
    pub async fn get_related(
        State(controller): State<Arc<PostController>>,
        Query(query): Query<DetailQuery>,
    ) -> AppResult<Json<Vec<PostSummary>>> {
        let id = parse_id(query)?;
        let related = controller.post_service.related(id).await?;
        Ok(Json(related))
    }

    /// GET /api/posts/recent - The newest posts
    pub async fn get_recent(
        State(controller): State<Arc<PostController>>,
    ) -> AppResult<Json<Vec<PostSummary>>> {
        let recent = controller.post_service.recent().await?;
        Ok(Json(recent))
    }
}

/// The id travels as a query-string value; a missing one is a terminal,
/// user-visible error for the page, not a crash.
fn parse_id(query: DetailQuery) -> Result<i64, AppError> {
    let raw = query
        .id
        .ok_or_else(|| AppError::MissingParameter("게시글 ID가 없습니다.".to_string()))?;
    raw.parse()
        .map_err(|_| AppError::BadRequest("잘못된 게시글 ID입니다.".to_string()))
}
