use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// One turn of the conversation, in the upstream wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct UpstreamRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamCompletion {
    pub choices: Vec<UpstreamChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UpstreamUsage>,
}

/// Outcome of one upstream call. An HTTP-level failure keeps its status so
/// the service can pick the matching user message; transport failures
/// surface as `reqwest::Error` from `complete` instead.
#[derive(Debug)]
pub enum UpstreamResponse {
    Success(UpstreamCompletion),
    Failure { status: StatusCode, body: String },
}

/// Thin client for the chat-completion endpoint the proxy forwards to.
pub struct ChatUpstreamClient {
    http_client: reqwest::Client,
    url: String,
    api_key: String,
}

impl ChatUpstreamClient {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url,
            api_key,
        }
    }

    /// Forward one completion request. A single attempt; no retries, no
    /// backoff.
    pub async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<UpstreamResponse, reqwest::Error> {
        let request = UpstreamRequest {
            model,
            messages,
            temperature,
            max_tokens,
        };

        let response = self
            .http_client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Ok(UpstreamResponse::Failure { status, body });
        }

        let completion = response.json::<UpstreamCompletion>().await?;
        Ok(UpstreamResponse::Success(completion))
    }
}
