pub mod error;
pub mod service;

pub use error::PostServiceError;
pub use service::{PostService, PostServiceApi};

use crate::domain::fortune::FortuneExtras;
use crate::domain::listing::model::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full editorial post record, as the detail page needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub author: String,
    pub created_at: Option<DateTime<Utc>>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub content: String,
    pub views: i64,
}

/// Response for GET /api/post
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub category_slug: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Post body HTML; horoscope posts get their date tokens rewritten.
    pub content: String,
    /// Locally tracked view count, including this view.
    pub views: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fortune: Option<FortuneExtras>,
}

/// Compact entry for the related/recent widgets.
#[derive(Debug, Serialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_text: Option<String>,
}
