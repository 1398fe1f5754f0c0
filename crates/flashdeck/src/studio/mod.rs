//! The full study-app state container.
//!
//! [`Studio`] wraps a [`Session`] with the state of the creation view:
//! the notes being edited, a file upload in progress, a format request in
//! flight, and the last user-facing error. Like the session it changes
//! only through a pure [`Studio::reduce`]; network calls happen outside
//! and their results come back in as [`Action`]s.
//!
//! ```
//! use flashdeck::{Action, Flashcard, MockProvider, Phase, Studio, format_notes};
//!
//! let mut studio = Studio::new();
//! studio.dispatch(Action::SetNotes("Water boils at 100C".into()));
//!
//! let notes = studio.format_request(None, false).unwrap();
//! studio.dispatch(Action::StartFormatting);
//! let action = match format_notes(&MockProvider::new(), &notes) {
//!     Ok(cards) => Action::FormatSucceeded(cards),
//!     Err(e) => Action::FormatFailed(e),
//! };
//! studio.dispatch(action);
//!
//! assert_eq!(studio.session().phase(), Phase::Reviewing);
//! assert!(studio.notes().is_empty());
//! ```

mod format;

pub use format::{FormatError, format_notes};

use crate::deck::Flashcard;
use crate::session::{Event, Session};

/// Everything the creation and review views can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The notes text was edited.
    SetNotes(String),
    /// A notes file was picked and is being read.
    StartFileLoad { name: String },
    /// The picked file was read as text.
    FileLoaded(String),
    /// The picked file could not be read.
    FileLoadFailed,
    /// A format request was sent to the completion service.
    StartFormatting,
    /// The completion service produced these cards.
    FormatSucceeded(Vec<Flashcard>),
    /// The format request failed.
    FormatFailed(FormatError),
    /// A review action.
    Session(Event),
}

impl From<Event> for Action {
    fn from(event: Event) -> Self {
        Action::Session(event)
    }
}

/// UI state: review session plus creation-view status.
#[derive(Debug, Clone, Default)]
pub struct Studio {
    session: Session,
    notes: String,
    file_name: Option<String>,
    loading: bool,
    formatting: bool,
    error: Option<String>,
}

impl Studio {
    /// An empty studio with no deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the next state.
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::SetNotes(notes) => self.notes = notes,
            Action::StartFileLoad { name } => {
                self.file_name = Some(name);
                self.loading = true;
                self.error = None;
            }
            Action::FileLoaded(text) => {
                self.notes = text;
                self.loading = false;
            }
            Action::FileLoadFailed => {
                self.error = Some(FormatError::FileRead.user_message());
                self.loading = false;
            }
            Action::StartFormatting => {
                if self.formatting {
                    log::debug!("ignoring start_formatting: request already in flight");
                } else {
                    self.formatting = true;
                    self.error = None;
                }
            }
            Action::FormatSucceeded(cards) if cards.is_empty() => {
                return self.reduce(Action::FormatFailed(FormatError::NoCards));
            }
            Action::FormatSucceeded(cards) => {
                self.session.dispatch(Event::LoadDeck(cards));
                self.notes.clear();
                self.formatting = false;
            }
            Action::FormatFailed(error) => {
                self.error = Some(error.user_message());
                self.formatting = false;
            }
            // Requests still in flight outlive the reset.
            Action::Session(Event::NewDeck) => {
                return Self {
                    loading: self.loading,
                    formatting: self.formatting,
                    ..Self::new()
                };
            }
            Action::Session(event) => {
                if event == Event::RestartPass {
                    self.error = None;
                }
                self.session.dispatch(event);
            }
        }
        self
    }

    /// Apply one action in place.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let state = std::mem::take(self);
        *self = state.reduce(action.into());
    }

    /// Check the inputs of a format request and return the notes to send.
    ///
    /// The credential is checked first, and only when the provider needs one.
    pub fn format_request(
        &self,
        credential: Option<&str>,
        credential_required: bool,
    ) -> Result<String, FormatError> {
        if credential_required && credential.is_none_or(|c| c.trim().is_empty()) {
            return Err(FormatError::MissingCredential);
        }
        if self.notes.trim().is_empty() {
            return Err(FormatError::MissingNotes);
        }
        Ok(self.notes.clone())
    }

    /// Whether a new format request may start.
    pub fn can_format(&self) -> bool {
        !self.loading && !self.formatting
    }

    /// The review session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Notes being edited.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Name of the last picked notes file.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Whether a file read is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a format request is in flight.
    pub fn is_formatting(&self) -> bool {
        self.formatting
    }

    /// Last user-facing error.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;

    fn cards() -> Vec<Flashcard> {
        vec![
            Flashcard::new("card-0", "One?", "1"),
            Flashcard::new("card-1", "Two?", "2"),
        ]
    }

    fn studying() -> Studio {
        let mut studio = Studio::new();
        studio.dispatch(Action::SetNotes("notes".into()));
        studio.dispatch(Action::StartFormatting);
        studio.dispatch(Action::FormatSucceeded(cards()));
        studio
    }

    #[test]
    fn test_format_request_checks_credential_first() {
        let studio = Studio::new();
        assert_eq!(
            studio.format_request(None, true),
            Err(FormatError::MissingCredential)
        );
        assert_eq!(
            studio.format_request(Some("  "), true),
            Err(FormatError::MissingCredential)
        );
        assert_eq!(
            studio.format_request(Some("sk-test"), true),
            Err(FormatError::MissingNotes)
        );
        assert_eq!(
            studio.format_request(None, false),
            Err(FormatError::MissingNotes)
        );
    }

    #[test]
    fn test_format_request_returns_notes() {
        let studio = Studio::new().reduce(Action::SetNotes("cells".into()));
        assert_eq!(studio.format_request(Some("sk"), true), Ok("cells".into()));
    }

    #[test]
    fn test_format_success_loads_deck() {
        let studio = studying();
        assert_eq!(studio.session().phase(), Phase::Reviewing);
        assert!(studio.notes().is_empty());
        assert!(!studio.is_formatting());
        assert!(studio.can_format());
    }

    #[test]
    fn test_start_formatting_once() {
        let studio = Studio::new()
            .reduce(Action::StartFormatting)
            .reduce(Action::StartFormatting);
        assert!(studio.is_formatting());
        assert!(!studio.can_format());
    }

    #[test]
    fn test_format_failure_keeps_deck() {
        let studio = studying()
            .reduce(Action::StartFormatting)
            .reduce(Action::FormatFailed(FormatError::Service("timeout".into())));
        assert_eq!(studio.session().deck_size(), 2);
        assert_eq!(
            studio.error(),
            Some("Failed to connect to the AI service. Check your API key and network connection.")
        );
        assert!(!studio.is_formatting());
    }

    #[test]
    fn test_empty_success_is_no_cards_error() {
        let studio = Studio::new()
            .reduce(Action::StartFormatting)
            .reduce(Action::FormatSucceeded(Vec::new()));
        assert_eq!(studio.session().phase(), Phase::Idle);
        assert_eq!(studio.error(), Some(FormatError::NoCards.to_string().as_str()));
    }

    #[test]
    fn test_file_load_flow() {
        let studio = Studio::new()
            .reduce(Action::StartFileLoad {
                name: "bio.md".into(),
            })
            .reduce(Action::FileLoaded("# Cell\nUnit of life".into()));
        assert_eq!(studio.file_name(), Some("bio.md"));
        assert_eq!(studio.notes(), "# Cell\nUnit of life");
        assert!(!studio.is_loading());
    }

    #[test]
    fn test_file_load_failure_keeps_deck() {
        let studio = studying()
            .reduce(Action::StartFileLoad {
                name: "bad.bin".into(),
            })
            .reduce(Action::FileLoadFailed);
        assert_eq!(studio.error(), Some("Failed to read file."));
        assert!(!studio.is_loading());
        assert_eq!(studio.session().remaining(), 2);
    }

    #[test]
    fn test_loading_blocks_format() {
        let studio = Studio::new().reduce(Action::StartFileLoad {
            name: "notes.txt".into(),
        });
        assert!(!studio.can_format());
    }

    #[test]
    fn test_session_events_forwarded() {
        let mut studio = studying();
        studio.dispatch(Event::Flip);
        studio.dispatch(Event::MarkKnown);
        assert_eq!(studio.session().known_count(), 1);
    }

    #[test]
    fn test_new_deck_resets_everything() {
        let mut studio = studying();
        studio.dispatch(Action::SetNotes("draft".into()));
        studio.dispatch(Action::FormatFailed(FormatError::NoCards));
        studio.dispatch(Event::NewDeck);

        assert_eq!(studio.session().phase(), Phase::Idle);
        assert!(studio.notes().is_empty());
        assert!(studio.error().is_none());
    }

    #[test]
    fn test_new_deck_keeps_format_in_flight() {
        let mut studio = studying();
        studio.dispatch(Action::SetNotes("more notes".into()));
        studio.dispatch(Action::StartFormatting);
        studio.dispatch(Event::NewDeck);

        assert_eq!(studio.session().phase(), Phase::Idle);
        assert!(studio.is_formatting());
        assert!(!studio.can_format());

        // A second request is refused until the first one resolves.
        studio.dispatch(Action::StartFormatting);
        studio.dispatch(Action::FormatSucceeded(cards()));
        assert!(!studio.is_formatting());
        assert!(studio.can_format());
        assert_eq!(studio.session().deck_size(), 2);
    }

    #[test]
    fn test_restart_clears_error() {
        let mut studio = studying();
        studio.dispatch(Event::MarkKnown);
        studio.dispatch(Event::MarkKnown);
        studio.dispatch(Action::FormatFailed(FormatError::NoCards));
        studio.dispatch(Event::RestartPass);

        assert!(studio.error().is_none());
        assert_eq!(studio.session().history().len(), 1);
    }
}
