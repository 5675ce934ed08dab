use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::BotError;
use crate::llm::types::CompletionRequest;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// A chat-completion backend. Production uses [`OpenAiClient`]; tests
/// substitute stubs that capture the request payload.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion request and return the first choice's text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, BotError>;
}

/// Completion response wire format (only the parts we read).
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// OpenAI-compatible chat-completion client.
pub struct OpenAiClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiClient {
    /// Build a client. A missing API key is not an error here; it surfaces
    /// as a `Configuration` error on the first call.
    pub fn new(api_key: Option<String>) -> Result<Self, BotError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BotError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, BotError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| BotError::Configuration("OPENAI_API_KEY is not set".to_string()))?;

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Generation(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error response".to_string());

            // The provider wraps failures in {"error": {"message": ...}}
            if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(&error_text) {
                if let Some(error_msg) = error_json
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                {
                    return Err(BotError::Generation(error_msg.to_string()));
                }
            }

            return Err(BotError::Generation(format!("HTTP {status}: {error_text}")));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| BotError::Generation(format!("failed to parse response: {e}")))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BotError::Generation("no choices in response".to_string()))?;

        Ok(choice.message.content)
    }
}
