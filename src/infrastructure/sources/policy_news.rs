use super::{non_empty, parse_published_at, ContentSource, SourceClient, SourceError};
use crate::domain::listing::model::{force_https, item_id, Category, Link, ListingItem};
use crate::domain::render::summary_text;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::{Arc, OnceLock};

/// Attribution used when the briefing feed omits the writer.
pub const DEFAULT_AUTHOR: &str = "정책브리핑";

#[derive(Debug, Deserialize)]
struct PolicyNewsDocument {
    #[serde(default)]
    items: Vec<RawNewsItem>,
}

/// Field mapping for `korea_now.json` (the policy briefing feed).
#[derive(Debug, Deserialize)]
struct RawNewsItem {
    #[serde(default)]
    title: String,
    /// HTML summary straight from the feed.
    #[serde(default)]
    summary: String,
    #[serde(default)]
    pub_date: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

/// Government policy news (`korea_now.json`), aggregated out-of-band.
pub struct PolicyNewsSource {
    client: Arc<SourceClient>,
}

impl PolicyNewsSource {
    pub fn new(client: Arc<SourceClient>) -> Self {
        Self { client }
    }

    fn map_items(document: PolicyNewsDocument) -> Vec<ListingItem> {
        document
            .items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| to_listing_item(index, raw))
            .collect()
    }
}

fn img_src_re() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).expect("valid regex"))
}

/// Pull the first embedded image out of the summary HTML as a thumbnail
/// fallback.
fn first_image_url(summary_html: &str) -> Option<String> {
    img_src_re()
        .captures(summary_html)
        .map(|captures| captures[1].to_string())
}

fn to_listing_item(index: usize, raw: RawNewsItem) -> ListingItem {
    let thumbnail_url = non_empty(raw.thumbnail_url)
        .or_else(|| first_image_url(&raw.summary))
        .map(|url| force_https(&url));

    let link = non_empty(raw.link)
        .map(|url| force_https(&url))
        .unwrap_or_else(|| "#".to_string());

    ListingItem {
        id: item_id("korea_now", index),
        title: raw.title,
        category: Category::PolicyNews,
        author: non_empty(raw.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        summary_text: summary_text(&raw.summary),
        summary_html: raw.summary,
        thumbnail_url,
        published_at: raw.pub_date.as_deref().and_then(parse_published_at),
        link: Link::External(link),
        region: None,
        address: None,
        tel: None,
        views: None,
    }
}

#[async_trait]
impl ContentSource for PolicyNewsSource {
    fn name(&self) -> &'static str {
        "korea_now"
    }

    async fn fetch(&self) -> Result<Vec<ListingItem>, SourceError> {
        let document: PolicyNewsDocument = self.client.fetch_json("korea_now.json").await?;
        Ok(Self::map_items(document))
    }
}
