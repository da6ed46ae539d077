use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::sidebar::service::SidebarResponse;
use crate::domain::sidebar::SidebarService;
use crate::error::AppResult;

pub struct CategoryController {
    sidebar_service: Arc<SidebarService>,
}

impl CategoryController {
    pub fn new(sidebar_service: Arc<SidebarService>) -> Self {
        Self { sidebar_service }
    }

    /// GET /api/categories - Sidebar categories with counts and fragment
    pub async fn get_categories(
        State(controller): State<Arc<CategoryController>>,
    ) -> AppResult<Json<SidebarResponse>> {
        let sidebar = controller.sidebar_service.get().await?;
        Ok(Json(sidebar))
    }
}
