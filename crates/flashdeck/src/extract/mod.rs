//! Note extraction: raw text in, ordered flashcards out.
//!
//! Extraction runs in two tiers. The delimited tier looks for `Q:` / `A:`
//! pairs, which is the format the completion prompt asks for. Only when it
//! finds nothing does the structural tier read the text as markdown and
//! pair each top-level heading with the paragraph that follows it.
//!
//! Extraction never fails. An empty result is the signal that the text
//! could not be turned into flashcards.
//!
//! # Example
//!
//! ```
//! use flashdeck::extract;
//!
//! let cards = extract("Q: What is 2+2?\nA: 4\n\nQ: Capital of France?\nA: Paris");
//! assert_eq!(cards.len(), 2);
//! assert_eq!(cards[1].question, "Capital of France?");
//! assert_eq!(cards[1].answer, "Paris");
//! ```

mod delimited;
mod structural;

use serde::{Deserialize, Serialize};

use crate::deck::Flashcard;

/// Which strategy produced an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionTier {
    /// `Q:` / `A:` pairs.
    Delimited,
    /// Top-level markdown headings followed by paragraphs.
    Structural,
}

impl ExtractionTier {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExtractionTier::Delimited => "Q:/A: pairs",
            ExtractionTier::Structural => "markdown headings",
        }
    }
}

/// Cards extracted from one input, and the tier that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Cards in emission order, ids `card-0`, `card-1`, ...
    pub cards: Vec<Flashcard>,
    /// `None` when no tier produced any cards.
    pub tier: Option<ExtractionTier>,
}

impl Extraction {
    /// Whether nothing could be extracted.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Extract flashcards from raw text.
pub fn extract(raw: &str) -> Vec<Flashcard> {
    extract_with_tier(raw).cards
}

/// Extract flashcards and report which tier produced them.
pub fn extract_with_tier(raw: &str) -> Extraction {
    let cards = delimited::extract_pairs(raw);
    if !cards.is_empty() {
        log::debug!("extracted {} cards from Q:/A: pairs", cards.len());
        return Extraction {
            cards,
            tier: Some(ExtractionTier::Delimited),
        };
    }

    let cards = structural::extract_sections(raw);
    if cards.is_empty() {
        log::debug!("no flashcards found in {} bytes of text", raw.len());
        return Extraction::default();
    }

    log::debug!("extracted {} cards from markdown headings", cards.len());
    Extraction {
        cards,
        tier: Some(ExtractionTier::Structural),
    }
}
