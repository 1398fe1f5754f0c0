//! Flashcards and the immutable deck they are studied from.
//!
//! A [`Deck`] is the authoritative, original-order set of cards produced by
//! one extraction. Review passes never modify it; they work on a queue
//! copied from it.

mod card;
mod persistence;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use card::{Flashcard, TrustedHtml, card_id};
pub use persistence::deck_path;

/// An ordered, immutable set of flashcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Flashcard>,

    /// When the deck was created.
    pub created_at: DateTime<Utc>,
}

impl Deck {
    /// Create a deck from cards in their original order.
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            created_at: Utc::now(),
        }
    }

    /// The cards in original order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// First card in original order.
    pub fn first(&self) -> Option<&Flashcard> {
        self.cards.first()
    }

    /// Look up a card by id.
    pub fn get(&self, id: &str) -> Option<&Flashcard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Iterate over the cards.
    pub fn iter(&self) -> std::slice::Iter<'_, Flashcard> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Flashcard>> for Deck {
    fn from(cards: Vec<Flashcard>) -> Self {
        Self::new(cards)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Flashcard;
    type IntoIter = std::slice::Iter<'a, Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
