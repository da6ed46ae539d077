use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::sidebar::SidebarService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness probes the category document, the smallest content source.
pub async fn health_ready(State(sidebar): State<Arc<SidebarService>>) -> impl IntoResponse {
    if sidebar.probe().await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "content": "reachable"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "content": "unreachable"
            })),
        )
    }
}
