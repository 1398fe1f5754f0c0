//! Completion service integration.
//!
//! Turning notes into flashcards is delegated to a text-completion
//! service. This module owns the prompt contract and a small set of
//! providers behind the [`CompletionProvider`] trait.
//!
//! # Supported Providers
//!
//! - **OpenAI** - GPT models via API (credential required)
//! - **Anthropic** - Claude models via API (credential required)
//! - **Ollama** - Local models, no credential needed (requires Ollama installed)
//! - **Mock** - Offline, deterministic replies for tests and demos
//!
//! # Example
//!
//! ```no_run
//! use flashdeck::{CompletionProvider, OpenAIProvider, format_notes};
//!
//! let provider = OpenAIProvider::new("sk-...").unwrap();
//! let cards = format_notes(&provider, "Mitochondria are the powerhouse of the cell").unwrap();
//! println!("{} cards", cards.len());
//! ```

mod anthropic;
mod http;
mod mock;
mod ollama;
mod openai;
pub mod prompts;
mod provider;

pub use anthropic::AnthropicProvider;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAIProvider;
pub use provider::{CompletionProvider, LlmConfig, ProviderKind};
