use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed category set of the site. Anything a source reports outside of
/// this set is carried verbatim but maps to the `index` slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Health,
    Fortune,
    PolicyNews,
    Travel,
    Unknown(String),
}

impl Category {
    pub fn from_name(name: &str) -> Self {
        match name {
            "건강상식" => Category::Health,
            "오늘의 운세" => Category::Fortune,
            "대한민국은, 지금" => Category::PolicyNews,
            "가보자고" => Category::Travel,
            other => Category::Unknown(other.to_string()),
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "health" => Some(Category::Health),
            "fortune" => Some(Category::Fortune),
            "korea-now" => Some(Category::PolicyNews),
            "go-now" => Some(Category::Travel),
            _ => None,
        }
    }

    /// Display name, as rendered on the site.
    pub fn name(&self) -> &str {
        match self {
            Category::Health => "건강상식",
            Category::Fortune => "오늘의 운세",
            Category::PolicyNews => "대한민국은, 지금",
            Category::Travel => "가보자고",
            Category::Unknown(name) => name,
        }
    }

    /// Page slug the category links to. Unknown categories fall back to the
    /// front page.
    pub fn slug(&self) -> &str {
        match self {
            Category::Health => "health",
            Category::Fortune => "fortune",
            Category::PolicyNews => "korea-now",
            Category::Travel => "go-now",
            Category::Unknown(_) => "index",
        }
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Category::from_name(&name))
    }
}

/// Where a card links to: an internal detail page keyed by the post's
/// natural id, or an external article/venue URL opened in a new context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Link {
    Internal(i64),
    External(String),
}

impl Link {
    pub fn href(&self) -> String {
        match self {
            Link::Internal(id) => format!("post.html?id={}", id),
            Link::External(url) => url.clone(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Link::External(_))
    }
}

/// One displayable entry of the merged listing, regardless of which source
/// produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingItem {
    /// Source-prefixed id, unique across the merged collection
    /// (e.g. `posts_12`, `korea_now_0`).
    pub id: String,
    pub title: String,
    pub category: Category,
    pub author: String,
    /// Raw HTML summary as delivered by the source.
    pub summary_html: String,
    /// Stripped/normalized plain text, capped at 160 chars with a marker.
    pub summary_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub link: Link,
    /// First whitespace-delimited token of the address (travel items only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    /// Cumulative view count, when the source carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<i64>,
}

/// Synthesize the merged-collection id for an item of `source` with the
/// given natural key or index.
pub fn item_id(source: &str, key: impl std::fmt::Display) -> String {
    format!("{}_{}", source, key)
}

/// Upgrade plain-http URLs so thumbnails and links do not trip
/// mixed-content blocking on the https site.
pub fn force_https(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("http://") {
        format!("https://{}", rest)
    } else {
        url.to_string()
    }
}
