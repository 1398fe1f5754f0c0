//! Flashdeck: turn study notes into flashcards and review them.
//!
//! Notes go to a completion service that rewrites them as question/answer
//! pairs, the reply is parsed into a [`Deck`], and the deck is studied
//! through a flip-card [`Session`] that scores first-try accuracy across
//! repeated passes.
//!
//! # Core Pieces
//!
//! - **Extraction**: [`extract`] turns raw text into cards, trying `Q:`/`A:`
//!   pairs first and markdown headings second
//! - **Session**: a pure state machine over review [`Event`]s
//! - **Studio**: the whole UI state, including format and upload status
//! - **Providers**: OpenAI, Anthropic, Ollama, or an offline mock
//!
//! # Example
//!
//! ```
//! use flashdeck::{Event, Phase, Session, extract};
//!
//! let cards = extract("Q: What is 2+2?\nA: 4\n\nQ: Capital of France?\nA: Paris");
//! let mut session = Session::new().reduce(Event::LoadDeck(cards));
//!
//! session.dispatch(Event::Flip);
//! session.dispatch(Event::MarkKnown);
//! session.dispatch(Event::MarkKnown);
//!
//! assert_eq!(session.phase(), Phase::Finished);
//! assert_eq!(session.summary().accuracy_percent, 100);
//! ```

pub mod credential;
pub mod deck;
pub mod error;
pub mod extract;
pub mod input;
pub mod llm;
pub mod session;
pub mod studio;

pub use credential::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, mask, resolve_credential,
};
pub use deck::{Deck, Flashcard, TrustedHtml, deck_path};
pub use error::{FlashdeckError, Result};
pub use extract::{Extraction, ExtractionTier, extract, extract_with_tier};
pub use input::{decode_notes, is_supported_notes_file, read_notes};
pub use llm::{
    AnthropicProvider, CompletionProvider, LlmConfig, MockProvider, OllamaProvider,
    OpenAIProvider, ProviderKind,
};
pub use session::{Event, Face, Grade, Phase, Session, SessionRecord, Summary};
pub use studio::{Action, FormatError, Studio, format_notes};
