pub mod filter;
pub mod model;
pub mod paginator;
pub mod service;

pub use filter::Filter;
pub use model::{Category, Link, ListingItem};
pub use paginator::{PageInfo, Paginator, ARTICLES, TRAVEL};
pub use service::{ListingService, ListingServiceApi};

use serde::Serialize;

/// One entry of a listing page: the normalized fields plus its rendered
/// card fragment.
#[derive(Debug, Serialize)]
pub struct ListingCard {
    #[serde(flatten)]
    pub item: ListingItem,
    pub html: String,
}

/// Response for GET /api/listing
#[derive(Debug, Serialize)]
pub struct ListingPage {
    pub items: Vec<ListingCard>,
    pub page: PageInfo,
    pub pagination_html: String,
}
