use super::{non_empty, ContentSource, SourceClient, SourceError};
use crate::domain::listing::model::{force_https, item_id, Category, Link, ListingItem};
use crate::domain::render::trim_summary;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// Attribution for the tourism feed.
pub const DEFAULT_AUTHOR: &str = "한국관광공사";

#[derive(Debug, Deserialize)]
struct TravelDocument {
    #[serde(default)]
    items: Vec<RawTravelItem>,
}

/// Field mapping for `go_now.json` (the tourism API dump).
#[derive(Debug, Deserialize)]
struct RawTravelItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    addr1: Option<String>,
    #[serde(default)]
    tel: Option<String>,
    #[serde(default)]
    firstimage: Option<String>,
    #[serde(default)]
    firstimage2: Option<String>,
    #[serde(default)]
    detail_link: Option<String>,
}

/// Travel listings (`go_now.json`).
pub struct TravelSource {
    client: Arc<SourceClient>,
}

impl TravelSource {
    pub fn new(client: Arc<SourceClient>) -> Self {
        Self { client }
    }

    fn map_items(document: TravelDocument) -> Vec<ListingItem> {
        document
            .items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| to_listing_item(index, raw))
            .collect()
    }
}

fn to_listing_item(index: usize, raw: RawTravelItem) -> ListingItem {
    let address = non_empty(raw.addr1);
    let region = address
        .as_deref()
        .and_then(|addr| addr.split_whitespace().next())
        .map(str::to_string);

    let thumbnail_url = non_empty(raw.firstimage)
        .or_else(|| non_empty(raw.firstimage2))
        .map(|url| force_https(&url));

    // venues without a detail page fall back to a name search
    let link = non_empty(raw.detail_link)
        .map(|url| force_https(&url))
        .unwrap_or_else(|| {
            format!(
                "https://search.naver.com/search.naver?query={}",
                urlencoding::encode(&raw.title)
            )
        });

    let summary = address.clone().unwrap_or_default();

    ListingItem {
        id: item_id("go_now", index),
        title: raw.title,
        category: Category::Travel,
        author: DEFAULT_AUTHOR.to_string(),
        summary_text: trim_summary(&summary),
        summary_html: summary,
        thumbnail_url,
        published_at: None,
        link: Link::External(link),
        region,
        address,
        tel: non_empty(raw.tel),
        views: None,
    }
}

#[async_trait]
impl ContentSource for TravelSource {
    fn name(&self) -> &'static str {
        "go_now"
    }

    async fn fetch(&self) -> Result<Vec<ListingItem>, SourceError> {
        let document: TravelDocument = self.client.fetch_json("go_now.json").await?;
        Ok(Self::map_items(document))
    }
}
