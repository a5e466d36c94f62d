use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Sampling temperature used for every request.
const TEMPERATURE: f32 = 0.4;

/// Cap on generated tokens per answer.
const MAX_TOKENS: u32 = 700;

/// Bound on the outbound call so a stalled upstream cannot hold a request
/// open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the built prompt to the completion service and returns the
    /// generated answer text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // Checked here rather than at startup: the credential may be absent
        // without preventing the process from serving anything else.
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("OPENAI_API_KEY is not set"))?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!(
            "Requesting completion from {} with model {}",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::upstream(status.as_u16(), message));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let answer = completion.first_text().ok_or(Error::EmptyCompletion)?;

        debug!("Received completion of {} characters", answer.len());

        Ok(answer)
    }
}
