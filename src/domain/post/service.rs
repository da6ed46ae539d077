use super::error::PostServiceError;
use super::{Post, PostDetailResponse, PostSummary};
use crate::domain::fortune::{FortuneService, ThreadRandom};
use crate::domain::listing::model::Category;
use crate::domain::render::{format_date_long, summary_text};
use crate::infrastructure::kv::KvStore;
use crate::infrastructure::sources::PostsRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

const RELATED_LIMIT: usize = 4;
const RECENT_LIMIT: usize = 5;

pub struct PostService {
    posts: Arc<dyn PostsRepository>,
    kv: Arc<KvStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostsRepository>, kv: Arc<KvStore>) -> Self {
        Self { posts, kv }
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, PostServiceError> {
        self.posts
            .fetch_posts()
            .await
            .map_err(|e| PostServiceError::Dependency(e.to_string()))
    }
}

#[async_trait]
pub trait PostServiceApi: Send + Sync {
    /// The detail view for one post; bumps its view counter.
    async fn get(&self, id: i64) -> Result<PostDetailResponse, PostServiceError>;

    /// Up to four other posts in the same category.
    async fn related(&self, id: i64) -> Result<Vec<PostSummary>, PostServiceError>;

    /// The five newest posts, in document order.
    async fn recent(&self) -> Result<Vec<PostSummary>, PostServiceError>;
}

#[async_trait]
impl PostServiceApi for PostService {
    async fn get(&self, id: i64) -> Result<PostDetailResponse, PostServiceError> {
        let posts = self.fetch_posts().await?;
        let post = posts
            .into_iter()
            .find(|post| post.id == id)
            .ok_or(PostServiceError::NotFound)?;

        // local view counter, independent of whatever the feed reports
        let views = match self.kv.increment(&format!("post_views_{}", id)).await {
            Ok(count) => count,
            Err(error) => {
                tracing::warn!(post_id = id, %error, "View counter not persisted");
                post.views
            }
        };

        let is_fortune = post.category == Category::Fortune;
        let now = Utc::now();
        let content = if is_fortune {
            FortuneService::substitute_date(&post.content, &now)
        } else {
            post.content.clone()
        };
        let fortune = is_fortune
            .then(|| FortuneService::decorate(&post.title, &mut ThreadRandom));

        tracing::info!(post_id = id, views, fortune = is_fortune, "Post detail served");

        Ok(PostDetailResponse {
            id: post.id,
            category_slug: post.category.slug().to_string(),
            title: post.title,
            category: post.category,
            author: post.author,
            date_text: post.created_at.as_ref().map(format_date_long),
            created_at: post.created_at,
            featured_image: post.featured_image,
            content,
            views,
            fortune,
        })
    }

    async fn related(&self, id: i64) -> Result<Vec<PostSummary>, PostServiceError> {
        let posts = self.fetch_posts().await?;
        let category = posts
            .iter()
            .find(|post| post.id == id)
            .map(|post| post.category.clone())
            .ok_or(PostServiceError::NotFound)?;

        Ok(posts
            .iter()
            .filter(|post| post.category == category && post.id != id)
            .take(RELATED_LIMIT)
            .map(to_summary)
            .collect())
    }

    async fn recent(&self) -> Result<Vec<PostSummary>, PostServiceError> {
        let posts = self.fetch_posts().await?;
        Ok(posts.iter().take(RECENT_LIMIT).map(to_summary).collect())
    }
}

fn to_summary(post: &Post) -> PostSummary {
    let excerpt = post
        .excerpt
        .clone()
        .unwrap_or_else(|| summary_text(&post.content));
    PostSummary {
        id: post.id,
        title: post.title.clone(),
        excerpt,
        featured_image: post.featured_image.clone(),
        date_text: post.created_at.as_ref().map(format_date_long),
    }
}
