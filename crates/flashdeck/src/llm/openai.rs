//! OpenAI chat completions provider.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{FlashdeckError, Result};

use super::http::{self, ChatMessage};
use super::prompts;
use super::provider::{CompletionProvider, LlmConfig, ProviderKind};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Provider backed by OpenAI chat models. Needs an API key.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl OpenAIProvider {
    /// Provider using the default chat model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(
            api_key,
            LlmConfig::with_model(ProviderKind::OpenAI.default_model()),
        )
    }

    pub fn with_config(api_key: impl Into<String>, config: LlmConfig) -> Result<Self> {
        Ok(Self {
            client: http::client(http::HOSTED_TIMEOUT)?,
            api_key: api_key.into(),
            config,
        })
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: [
                ChatMessage::system(prompts::system_prompt()),
                ChatMessage::user(prompt),
            ],
        }
    }
}

impl CompletionProvider for OpenAIProvider {
    fn complete(&self, prompt: &str) -> Result<String> {
        let request = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&self.request(prompt));

        let reply: ChatResponse =
            http::send_json(request).map_err(|failure| failure.into_error(self.name()))?;

        reply
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or_else(|| FlashdeckError::Completion("openai reply had no choices".to_string()))
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: usize,
    temperature: f64,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}
