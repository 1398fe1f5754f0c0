//! Mock completion provider for testing and offline use.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{FlashdeckError, Result};

use super::prompts;
use super::provider::{CompletionProvider, LlmConfig};

#[derive(Debug, Clone)]
enum Reply {
    /// One card per non-empty line of the notes.
    Echo,
    Fixed(String),
    Fail(String),
}

/// Mock provider that returns predictable replies.
///
/// By default it turns every non-empty line of the notes into a
/// `Q:` / `A:` pair, so the whole pipeline can run without a network.
#[derive(Debug)]
pub struct MockProvider {
    config: LlmConfig,
    reply: Reply,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Create a new echoing mock provider.
    pub fn new() -> Self {
        Self::with_config(LlmConfig::with_model("mock"))
    }

    /// Create with custom configuration.
    pub fn with_config(config: LlmConfig) -> Self {
        Self {
            config,
            reply: Reply::Echo,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always reply with `text`.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fixed(text.into()),
            ..Self::new()
        }
    }

    /// Always fail with a completion error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fail(message.into()),
            ..Self::new()
        }
    }

    /// Number of completed or failed calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionProvider for MockProvider {
    fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            Reply::Fixed(text) => Ok(text.clone()),
            Reply::Fail(message) => Err(FlashdeckError::Completion(message.clone())),
            Reply::Echo => {
                let notes = prompts::notes_section(prompt).unwrap_or(prompt);
                let cards: Vec<String> = notes
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .enumerate()
                    .map(|(i, line)| format!("Q: What does note {} say?\nA: {}", i + 1, line))
                    .collect();
                Ok(cards.join("\n\n"))
            }
        }
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
