pub mod categories;
pub mod client;
pub mod policy_news;
pub mod posts;
pub mod travel;

pub use categories::CategorySource;
pub use client::SourceClient;
pub use policy_news::PolicyNewsSource;
pub use posts::PostsSource;
pub use travel::TravelSource;

use crate::domain::listing::model::ListingItem;
use crate::domain::sidebar::CategoryEntry;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Errors a single source fetch can produce. A malformed payload is handled
/// exactly like an unreachable source: the source contributes zero items.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One external document contributing items to the merged listing.
///
/// Implementations own the field mapping from their source-specific shape
/// into `ListingItem`, including the per-field defaults.
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch and normalize the source's items. One attempt, no retries.
    async fn fetch(&self) -> Result<Vec<ListingItem>, SourceError>;
}

/// Provider of the sidebar category document.
#[async_trait]
pub trait CategoryDirectory: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<CategoryEntry>, SourceError>;
}

/// Access to the full post records behind the editorial listing; the detail
/// page needs more than the normalized `ListingItem` carries.
#[async_trait]
pub trait PostsRepository: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<crate::domain::post::Post>, SourceError>;
}

/// Parse the date formats the feeds actually deliver. Anything else is
/// treated as absent rather than failing the item.
pub(crate) fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y.%m.%d %H:%M", "%Y%m%d%H%M%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    for format in ["%Y-%m-%d", "%Y.%m.%d", "%Y%m%d"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, format) {
            return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}

/// Treat empty strings from a feed as an absent value.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
