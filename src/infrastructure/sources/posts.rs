use super::{
    non_empty, parse_published_at, ContentSource, PostsRepository, SourceClient, SourceError,
};
use crate::domain::listing::model::{force_https, item_id, Category, Link, ListingItem};
use crate::domain::post::Post;
use crate::domain::render::summary_text;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// Byline used when an editorial post does not name its author.
pub const DEFAULT_AUTHOR: &str = "시니어 전문 저널리스트 장병희";

#[derive(Debug, Deserialize)]
struct PostsDocument {
    #[serde(default)]
    posts: Vec<RawPost>,
}

/// Field mapping for `posts.json`. Everything but the id is optional with a
/// per-field default.
#[derive(Debug, Deserialize)]
struct RawPost {
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    featured_image: Option<String>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    views: Option<i64>,
}

/// Editorial posts (`posts.json`): health articles and horoscopes.
pub struct PostsSource {
    client: Arc<SourceClient>,
}

impl PostsSource {
    pub fn new(client: Arc<SourceClient>) -> Self {
        Self { client }
    }

    fn map_posts(document: PostsDocument) -> Vec<Post> {
        document.posts.into_iter().map(to_post).collect()
    }
}

fn to_post(raw: RawPost) -> Post {
    Post {
        id: raw.id,
        title: raw.title,
        category: Category::from_name(&raw.category),
        author: non_empty(raw.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        created_at: raw.created_at.as_deref().and_then(parse_published_at),
        excerpt: non_empty(raw.excerpt),
        featured_image: non_empty(raw.featured_image).map(|url| force_https(&url)),
        content: raw.content,
        views: raw.views.unwrap_or(0),
    }
}

fn to_listing_item(post: &Post) -> ListingItem {
    let summary_source = post.excerpt.as_deref().unwrap_or(&post.content);
    ListingItem {
        id: item_id("posts", post.id),
        title: post.title.clone(),
        category: post.category.clone(),
        author: post.author.clone(),
        summary_html: summary_source.to_string(),
        summary_text: summary_text(summary_source),
        thumbnail_url: post.featured_image.clone(),
        published_at: post.created_at,
        link: Link::Internal(post.id),
        region: None,
        address: None,
        tel: None,
        views: (post.views > 0).then_some(post.views),
    }
}

#[async_trait]
impl ContentSource for PostsSource {
    fn name(&self) -> &'static str {
        "posts"
    }

    async fn fetch(&self) -> Result<Vec<ListingItem>, SourceError> {
        let document: PostsDocument = self.client.fetch_json("posts.json").await?;
        let posts = Self::map_posts(document);
        Ok(posts.iter().map(to_listing_item).collect())
    }
}

#[async_trait]
impl PostsRepository for PostsSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        let document: PostsDocument = self.client.fetch_json("posts.json").await?;
        Ok(Self::map_posts(document))
    }
}
