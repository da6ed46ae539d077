use super::filter::Filter;
use super::model::ListingItem;
use super::paginator::{Paginator, ARTICLES, TRAVEL};
use super::{ListingCard, ListingPage};
use crate::domain::render::{render_card, render_pagination};
use crate::infrastructure::sources::ContentSource;
use async_trait::async_trait;
use std::sync::Arc;

pub struct ListingService {
    sources: Vec<Arc<dyn ContentSource>>,
}

impl ListingService {
    pub fn new(sources: Vec<Arc<dyn ContentSource>>) -> Self {
        Self { sources }
    }

    /// Fetch every source once and merge, in source order. A failing source
    /// contributes nothing; the others are unaffected.
    async fn load_all(&self) -> Vec<ListingItem> {
        let fetches = self.sources.iter().map(|source| source.fetch());
        let results = futures::future::join_all(fetches).await;

        let mut merged = Vec::new();
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(items) => {
                    tracing::info!(source = source.name(), count = items.len(), "Source loaded");
                    merged.extend(items);
                }
                Err(error) => {
                    tracing::warn!(source = source.name(), %error, "Source failed, omitting");
                }
            }
        }
        merged
    }

    fn paginator_for(filter: &Filter) -> Paginator {
        match filter {
            Filter::Category(category) if *category == super::Category::Travel => TRAVEL,
            Filter::Region(_) => TRAVEL,
            _ => ARTICLES,
        }
    }
}

#[async_trait]
pub trait ListingServiceApi: Send + Sync {
    /// One page of the merged collection under the given filter.
    async fn list(&self, filter: Filter, page: usize) -> ListingPage;
}

#[async_trait]
impl ListingServiceApi for ListingService {
    async fn list(&self, filter: Filter, page: usize) -> ListingPage {
        let merged = self.load_all().await;
        let matching = filter.apply(&merged);

        let paginator = Self::paginator_for(&filter);
        let info = paginator.paginate(matching.len(), page);

        let items = matching[info.start..info.end]
            .iter()
            .map(|item| ListingCard {
                html: render_card(item),
                item: (*item).clone(),
            })
            .collect();

        tracing::info!(
            total = merged.len(),
            matching = info.total_items,
            page = info.current_page,
            "Listing assembled"
        );

        ListingPage {
            pagination_html: render_pagination(&info),
            page: info,
            items,
        }
    }
}
