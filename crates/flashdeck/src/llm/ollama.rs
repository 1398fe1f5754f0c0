//! Ollama provider for locally run models.
//!
//! No API key is needed. The server defaults to `localhost:11434`;
//! set `OLLAMA_HOST` to point elsewhere.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{FlashdeckError, Result};

use super::http::{self, ChatMessage, Failure};
use super::prompts;
use super::provider::{CompletionProvider, LlmConfig, ProviderKind};

const DEFAULT_HOST: &str = "http://localhost:11434";

/// Provider backed by a local Ollama server.
pub struct OllamaProvider {
    client: Client,
    api_url: String,
    config: LlmConfig,
}

impl OllamaProvider {
    /// Provider using the default local model (`ollama pull llama3.2`).
    pub fn new() -> Result<Self> {
        Self::with_config(LlmConfig::with_model(ProviderKind::Ollama.default_model()))
    }

    pub fn with_config(config: LlmConfig) -> Result<Self> {
        let host = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Ok(Self {
            client: http::client(http::LOCAL_TIMEOUT)?,
            api_url: chat_url(&host),
            config,
        })
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            stream: false,
            options: Options {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
            messages: [
                ChatMessage::system(prompts::system_prompt()),
                ChatMessage::user(prompt),
            ],
        }
    }

    /// Add a hint for the two failures people actually hit.
    fn explain(&self, failure: Failure) -> FlashdeckError {
        match failure {
            Failure::Connect(_) => FlashdeckError::Completion(format!(
                "could not reach Ollama at {}. Is it running? Start it with: ollama serve",
                self.api_url
            )),
            Failure::Status(_, body) if body.contains("not found") => {
                FlashdeckError::Completion(format!(
                    "model '{}' not found. Pull it with: ollama pull {}",
                    self.config.model, self.config.model
                ))
            }
            other => other.into_error(self.name()),
        }
    }
}

impl CompletionProvider for OllamaProvider {
    fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.client.post(&self.api_url).json(&self.request(prompt));
        let reply: ChatResponse = http::send_json(request).map_err(|f| self.explain(f))?;
        Ok(reply.message.content)
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

fn chat_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{}/api/chat", host)
    } else {
        format!("http://{}/api/chat", host)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    stream: bool,
    options: Options,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct Options {
    temperature: f64,
    num_predict: usize,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}
