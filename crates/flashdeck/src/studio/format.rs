//! Turning notes into a deck through the completion service.

use thiserror::Error;

use crate::deck::Flashcard;
use crate::extract::extract_with_tier;
use crate::llm::{CompletionProvider, prompts};

/// Why a format request did not produce a deck.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No credential was supplied for a provider that needs one.
    #[error("Please enter your API key.")]
    MissingCredential,

    /// The notes were empty.
    #[error("Please enter some notes to format.")]
    MissingNotes,

    /// Network failure, rejected credential, or a non-success response.
    #[error("Failed to connect to the AI service. Check your API key and network connection.")]
    Service(String),

    /// The service answered but nothing could be extracted from it.
    #[error(
        "The AI couldn't format the notes into flashcards. Please check the notes or try again."
    )]
    NoCards,

    /// An uploaded notes file could not be read.
    #[error("Failed to read file.")]
    FileRead,
}

impl FormatError {
    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether the request was rejected before reaching the service.
    pub fn is_input_error(&self) -> bool {
        matches!(self, FormatError::MissingCredential | FormatError::MissingNotes)
    }

    /// Underlying service error, for logs.
    pub fn detail(&self) -> Option<&str> {
        match self {
            FormatError::Service(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Ask `provider` to rewrite `notes` as flashcards and extract them.
///
/// The provider is called exactly once. Its errors become
/// [`FormatError::Service`]; a reply with no extractable cards becomes
/// [`FormatError::NoCards`].
pub fn format_notes(
    provider: &dyn CompletionProvider,
    notes: &str,
) -> Result<Vec<Flashcard>, FormatError> {
    let prompt = prompts::flashcard_prompt(notes);

    let response = provider.complete(&prompt).map_err(|e| {
        log::warn!("{} completion failed: {}", provider.name(), e);
        FormatError::Service(e.to_string())
    })?;

    let extraction = extract_with_tier(response.trim());
    match extraction.tier {
        Some(tier) => {
            log::info!(
                "{} reply gave {} cards from {}",
                provider.name(),
                extraction.cards.len(),
                tier.label()
            );
            Ok(extraction.cards)
        }
        None => {
            log::info!(
                "{} reply ({} bytes) had no flashcards",
                provider.name(),
                response.len()
            );
            Err(FormatError::NoCards)
        }
    }
}
