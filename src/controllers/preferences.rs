use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::infrastructure::kv::KvStore;

const TITLE_KEY: &str = "user_title";

#[derive(Debug, Serialize, Deserialize)]
pub struct TitlePreference {
    /// How the chatbot addresses the user (할머니 / 할아버지). Absent until
    /// the user picks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

pub struct PreferencesController {
    kv: Arc<KvStore>,
}

impl PreferencesController {
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// GET /api/preferences/title - Read the saved form of address
    pub async fn get_title(
        State(controller): State<Arc<PreferencesController>>,
    ) -> Json<TitlePreference> {
        Json(TitlePreference {
            title: controller.kv.get(TITLE_KEY).await,
        })
    }

    /// PUT /api/preferences/title - Save the form of address
    pub async fn set_title(
        State(controller): State<Arc<PreferencesController>>,
        Json(preference): Json<TitlePreference>,
    ) -> AppResult<StatusCode> {
        let title = preference
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("호칭을 입력해주세요.".to_string()))?;

        controller
            .kv
            .set(TITLE_KEY, title.trim())
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(StatusCode::NO_CONTENT)
    }
}
