use super::CategoryEntry;
use crate::domain::render::render_sidebar;
use crate::error::AppError;
use crate::infrastructure::sources::CategoryDirectory;
use serde::Serialize;
use std::sync::Arc;

/// Response for GET /api/categories
#[derive(Debug, Serialize)]
pub struct SidebarResponse {
    pub categories: Vec<CategoryEntry>,
    pub html: String,
}

/// Serves the category sidebar. Runs off its own small document and never
/// consults the listing filter.
pub struct SidebarService {
    directory: Arc<dyn CategoryDirectory>,
}

impl SidebarService {
    pub fn new(directory: Arc<dyn CategoryDirectory>) -> Self {
        Self { directory }
    }

    pub async fn get(&self) -> Result<SidebarResponse, AppError> {
        let categories = self.directory.fetch_categories().await.map_err(|error| {
            tracing::warn!(%error, "Category document unavailable");
            AppError::ExternalService("카테고리를 불러오지 못했습니다.".to_string())
        })?;

        tracing::info!(count = categories.len(), "Categories loaded");

        Ok(SidebarResponse {
            html: render_sidebar(&categories),
            categories,
        })
    }

    /// Cheap readiness probe: the category document is the smallest source.
    pub async fn probe(&self) -> bool {
        self.directory.fetch_categories().await.is_ok()
    }
}
