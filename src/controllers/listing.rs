use axum::{extract::{Query, State}, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::listing::{Filter, ListingPage, ListingService, ListingServiceApi};
use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    /// Tag filter: `all`, a category slug, or a region token.
    #[serde(default)]
    pub filter: Option<String>,
    /// Free-text query; ignored while a tag filter is active.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

pub struct ListingController {
    listing_service: Arc<ListingService>,
}

impl ListingController {
    pub fn new(listing_service: Arc<ListingService>) -> Self {
        Self { listing_service }
    }

    /// GET /api/listing - One page of the merged, filtered collection
    pub async fn list(
        State(controller): State<Arc<ListingController>>,
        Query(query): Query<ListingQuery>,
    ) -> AppResult<Json<ListingPage>> {
        let filter = Filter::from_params(query.filter.as_deref(), query.q.as_deref());
        // a fresh filter always lands on page 1; explicit pages are clamped
        let page = query.page.unwrap_or(1);

        let listing = controller.listing_service.list(filter, page).await;
        Ok(Json(listing))
    }
}
