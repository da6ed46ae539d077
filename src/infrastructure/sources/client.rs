use super::SourceError;
use chrono::Utc;
use serde::de::DeserializeOwned;

/// Shared fetcher for the static content documents. Every request carries a
/// fresh `v` query parameter so intermediate caches never serve a stale
/// document (the horoscope and news feeds rotate daily or faster).
pub struct SourceClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SourceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn document_url(&self, document: &str) -> String {
        format!(
            "{}/{}?v={}",
            self.base_url,
            document,
            Utc::now().timestamp_millis()
        )
    }

    /// Fetch `document` and decode it. Non-2xx statuses and undecodable
    /// bodies are both errors; the caller decides how to degrade.
    pub async fn fetch_json<T: DeserializeOwned>(&self, document: &str) -> Result<T, SourceError> {
        let url = self.document_url(document);
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
