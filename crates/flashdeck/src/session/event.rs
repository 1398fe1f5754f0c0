//! Events accepted by the session state machine.

use crate::deck::Flashcard;

/// A user action or external result applied to a [`Session`](super::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replace everything with a fresh deck. Clears session history.
    LoadDeck(Vec<Flashcard>),
    /// Turn the current card over.
    Flip,
    /// The current card was known.
    MarkKnown,
    /// The current card was not known; it goes to the back of the queue.
    MarkUnknown,
    /// Archive the finished pass and start the same deck again.
    RestartPass,
    /// Drop the deck and its history.
    NewDeck,
}

impl Event {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Event::LoadDeck(_) => "load_deck",
            Event::Flip => "flip",
            Event::MarkKnown => "mark_known",
            Event::MarkUnknown => "mark_unknown",
            Event::RestartPass => "restart_pass",
            Event::NewDeck => "new_deck",
        }
    }
}
