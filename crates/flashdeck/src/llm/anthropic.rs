//! Anthropic messages API provider.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{FlashdeckError, Result};

use super::http::{self, ChatMessage};
use super::prompts;
use super::provider::{CompletionProvider, LlmConfig, ProviderKind};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Provider backed by Claude models. Needs an API key.
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl AnthropicProvider {
    /// Provider using the default Claude model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(
            api_key,
            LlmConfig::with_model(ProviderKind::Anthropic.default_model()),
        )
    }

    pub fn with_config(api_key: impl Into<String>, config: LlmConfig) -> Result<Self> {
        Ok(Self {
            client: http::client(http::HOSTED_TIMEOUT)?,
            api_key: api_key.into(),
            config,
        })
    }

    fn request<'a>(&'a self, prompt: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: prompts::system_prompt(),
            messages: [ChatMessage::user(prompt)],
        }
    }
}

impl CompletionProvider for AnthropicProvider {
    fn complete(&self, prompt: &str) -> Result<String> {
        let request = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request(prompt));

        let reply: MessagesResponse =
            http::send_json(request).map_err(|failure| failure.into_error(self.name()))?;

        let text: Vec<String> = reply
            .content
            .into_iter()
            .filter_map(|block| match block {
                Block::Text { text } => Some(text),
                Block::Other => None,
            })
            .collect();

        if text.is_empty() {
            return Err(FlashdeckError::Completion(
                "anthropic reply had no text".to_string(),
            ));
        }
        Ok(text.concat())
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: usize,
    temperature: f64,
    system: &'static str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<Block>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Text { text: String },
    #[serde(other)]
    Other,
}
