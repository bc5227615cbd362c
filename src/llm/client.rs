use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Seam for the generative upstream so handlers can be exercised without
/// the network.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            // An empty key counts as unconfigured.
            api_key: config.api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        // Checked before anything is built so an unconfigured deployment
        // never produces upstream traffic.
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let endpoint = self.endpoint();
        debug!("Gemini request: endpoint={}, model={}", endpoint, self.model);

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        debug!("Gemini response status: {}", response.status());

        // Failures are reported in the body's `error` field, so the body is
        // parsed the same way whatever the HTTP status.
        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::malformed(e.to_string()))?;

        body.into_text()
    }
}
