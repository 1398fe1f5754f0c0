//! The session state and its transition function.

use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::deck::{Deck, Flashcard};

use super::event::Event;
use super::record::{SessionRecord, Summary};

/// Which side of the current card is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Face up: the question.
    #[default]
    Question,
    /// Flipped: the answer.
    Answer,
}

impl Face {
    /// The other side.
    pub fn flipped(self) -> Self {
        match self {
            Face::Question => Face::Answer,
            Face::Answer => Face::Question,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No deck loaded.
    Idle,
    /// Cards remain in the working queue.
    Reviewing,
    /// The working queue is empty.
    Finished,
}

/// Review state for one deck.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// `None` until a deck is loaded.
    deck: Option<Deck>,
    /// Cards pending review; the head is the current card.
    queue: VecDeque<Flashcard>,
    /// Cards marked known this pass, in the order they were marked.
    known: Vec<Flashcard>,
    /// Ids marked unknown at least once this pass.
    retried: BTreeSet<String>,
    first_try_correct: usize,
    history: Vec<SessionRecord>,
    face: Face,
}

impl Session {
    /// An idle session with no deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the next state.
    ///
    /// Events that do not apply in the current state (grading with no
    /// current card, restarting an unfinished pass) leave it unchanged.
    pub fn reduce(mut self, event: Event) -> Self {
        let name = event.name();
        match event {
            Event::LoadDeck(cards) => return Self::loaded(cards),
            Event::NewDeck => return Self::new(),
            Event::Flip => {
                if self.queue.is_empty() {
                    log::debug!("ignoring {}: no current card", name);
                } else {
                    self.face = self.face.flipped();
                }
            }
            Event::MarkKnown => match self.queue.pop_front() {
                Some(card) => {
                    if !self.retried.contains(&card.id) {
                        self.first_try_correct += 1;
                    }
                    self.known.push(card);
                    self.face = Face::Question;
                }
                None => log::debug!("ignoring {}: no current card", name),
            },
            Event::MarkUnknown => match self.queue.pop_front() {
                Some(card) => {
                    self.retried.insert(card.id.clone());
                    self.queue.push_back(card);
                    self.face = Face::Question;
                }
                None => log::debug!("ignoring {}: no current card", name),
            },
            Event::RestartPass => {
                if self.phase() == Phase::Finished {
                    self.restart();
                } else {
                    log::debug!("ignoring {}: pass not finished", name);
                }
            }
        }
        self
    }

    /// Apply one event in place.
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(self);
        *self = state.reduce(event);
    }

    fn loaded(cards: Vec<Flashcard>) -> Self {
        log::info!("loaded deck of {} cards", cards.len());
        Self {
            queue: cards.iter().cloned().collect(),
            deck: Some(Deck::new(cards)),
            ..Self::default()
        }
    }

    fn restart(&mut self) {
        let record = SessionRecord {
            attempt: self.history.len() as u32 + 1,
            accuracy: self.summary().accuracy_percent,
        };
        log::info!(
            "archived attempt {} at {}%",
            record.attempt,
            record.accuracy
        );
        self.history.push(record);

        self.queue = self
            .deck
            .as_ref()
            .map(|deck| deck.iter().cloned().collect())
            .unwrap_or_default();
        self.known.clear();
        self.retried.clear();
        self.first_try_correct = 0;
        self.face = Face::Question;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match (&self.deck, self.queue.is_empty()) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Reviewing,
            (Some(_), true) => Phase::Finished,
        }
    }

    /// The loaded deck in original order, if any.
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// Number of cards in the loaded deck.
    pub fn deck_size(&self) -> usize {
        self.deck.as_ref().map(Deck::len).unwrap_or(0)
    }

    /// The card under review.
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.queue.front()
    }

    /// Which side of the current card is showing.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Cards still pending, current card first.
    pub fn queue(&self) -> impl Iterator<Item = &Flashcard> {
        self.queue.iter()
    }

    /// Cards pending review.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Cards marked known this pass.
    pub fn known(&self) -> &[Flashcard] {
        &self.known
    }

    /// Number of cards marked known this pass.
    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    /// Whether `id` has been marked unknown this pass.
    pub fn was_retried(&self, id: &str) -> bool {
        self.retried.contains(id)
    }

    /// Cards known on first presentation this pass.
    pub fn first_try_correct(&self) -> usize {
        self.first_try_correct
    }

    /// Archived passes for this deck, oldest first.
    pub fn history(&self) -> &[SessionRecord] {
        &self.history
    }

    /// Score of the current pass.
    pub fn summary(&self) -> Summary {
        Summary::new(self.first_try_correct, self.deck_size())
    }
}
