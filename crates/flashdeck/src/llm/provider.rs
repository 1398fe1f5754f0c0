//! Completion provider trait, configuration and provider selection.

use crate::error::{FlashdeckError, Result};

use super::{AnthropicProvider, MockProvider, OllamaProvider, OpenAIProvider};

/// Configuration for completion providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model to use (e.g., "gpt-3.5-turbo").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 2048,
            temperature: 0.3,
        }
    }
}

impl LlmConfig {
    /// Default configuration with a specific model.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }
}

/// A text-completion service.
///
/// Implementations must be thread-safe (Send + Sync) so a server can share
/// one across requests.
pub trait CompletionProvider: Send + Sync {
    /// Send `prompt` and return the reply text.
    fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}

/// Which provider to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderKind {
    /// OpenAI chat completions.
    #[default]
    OpenAI,
    /// Anthropic messages API.
    Anthropic,
    /// Ollama local models.
    Ollama,
    /// Offline mock provider.
    Mock,
}

impl ProviderKind {
    /// Whether requests need a credential.
    pub fn needs_credential(&self) -> bool {
        matches!(self, ProviderKind::OpenAI | ProviderKind::Anthropic)
    }

    /// Environment variable consulted when no credential is stored.
    pub fn credential_env_var(&self) -> Option<&'static str> {
        match self {
            ProviderKind::OpenAI => Some("OPENAI_API_KEY"),
            ProviderKind::Anthropic => Some("ANTHROPIC_API_KEY"),
            ProviderKind::Ollama | ProviderKind::Mock => None,
        }
    }

    /// Model used when none is given.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "gpt-3.5-turbo",
            ProviderKind::Anthropic => "claude-sonnet-4-20250514",
            ProviderKind::Ollama => "llama3.2",
            ProviderKind::Mock => "mock",
        }
    }

    /// Build a provider for one request.
    pub fn build(
        &self,
        credential: Option<&str>,
        model: Option<&str>,
    ) -> Result<Box<dyn CompletionProvider>> {
        let config = LlmConfig::with_model(model.unwrap_or(self.default_model()));
        let credential = credential.map(str::trim).filter(|c| !c.is_empty());

        let provider: Box<dyn CompletionProvider> = match self {
            ProviderKind::OpenAI => Box::new(OpenAIProvider::with_config(
                self.require(credential)?,
                config,
            )?),
            ProviderKind::Anthropic => Box::new(AnthropicProvider::with_config(
                self.require(credential)?,
                config,
            )?),
            ProviderKind::Ollama => Box::new(OllamaProvider::with_config(config)?),
            ProviderKind::Mock => Box::new(MockProvider::with_config(config)),
        };
        Ok(provider)
    }

    fn require<'a>(&self, credential: Option<&'a str>) -> Result<&'a str> {
        credential.ok_or_else(|| {
            FlashdeckError::Config(format!("{} requires an API key", self))
        })
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" | "gpt" => Ok(ProviderKind::OpenAI),
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "ollama" | "local" => Ok(ProviderKind::Ollama),
            "mock" | "test" => Ok(ProviderKind::Mock),
            _ => Err(format!(
                "Unknown provider: {}. Use: openai, anthropic, ollama, or mock.",
                s
            )),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::OpenAI => write!(f, "openai"),
            ProviderKind::Anthropic => write!(f, "anthropic"),
            ProviderKind::Ollama => write!(f, "ollama"),
            ProviderKind::Mock => write!(f, "mock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_kind() {
        assert_eq!("OpenAI".parse::<ProviderKind>(), Ok(ProviderKind::OpenAI));
        assert_eq!("claude".parse::<ProviderKind>(), Ok(ProviderKind::Anthropic));
        assert_eq!("local".parse::<ProviderKind>(), Ok(ProviderKind::Ollama));
        assert_eq!("mock".parse::<ProviderKind>(), Ok(ProviderKind::Mock));
        assert!("bard".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_needs_credential() {
        assert!(ProviderKind::OpenAI.needs_credential());
        assert!(ProviderKind::Anthropic.needs_credential());
        assert!(!ProviderKind::Ollama.needs_credential());
        assert!(!ProviderKind::Mock.needs_credential());
    }

    #[test]
    fn test_build_requires_credential() {
        assert!(ProviderKind::OpenAI.build(None, None).is_err());
        assert!(ProviderKind::OpenAI.build(Some("   "), None).is_err());
    }

    #[test]
    fn test_build_mock_with_model() {
        let provider = ProviderKind::Mock.build(None, Some("custom")).unwrap();
        assert_eq!(provider.name(), "mock");
        assert_eq!(provider.config().model, "custom");
    }

    #[test]
    fn test_build_openai_default_model() {
        let provider = ProviderKind::OpenAI.build(Some("sk-test"), None).unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.config().model, "gpt-3.5-turbo");
    }
}
