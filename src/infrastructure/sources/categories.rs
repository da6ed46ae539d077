use super::{CategoryDirectory, SourceClient, SourceError};
use crate::domain::sidebar::CategoryEntry;
use async_trait::async_trait;
use std::sync::Arc;

/// Sidebar category document (`categories.json`, a bare array).
pub struct CategorySource {
    client: Arc<SourceClient>,
}

impl CategorySource {
    pub fn new(client: Arc<SourceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryDirectory for CategorySource {
    async fn fetch_categories(&self) -> Result<Vec<CategoryEntry>, SourceError> {
        self.client.fetch_json("categories.json").await
    }
}
