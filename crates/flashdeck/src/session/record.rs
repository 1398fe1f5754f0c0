//! Scoring: pass summaries and archived session records.

use serde::{Deserialize, Serialize};

/// Accuracy (percent) at or above which a pass counts as excellent.
pub const EXCELLENT_THRESHOLD: usize = 90;

/// Archived accuracy of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// 1-based attempt number within the deck's lifetime.
    pub attempt: u32,
    /// First-try accuracy, rounded to a whole percent.
    pub accuracy: u32,
}

/// How a pass went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// First-try accuracy of at least [`EXCELLENT_THRESHOLD`] percent.
    Excellent,
    /// Anything below that.
    KeepPracticing,
}

impl Grade {
    /// Message shown with the finished summary.
    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent work!",
            Grade::KeepPracticing => "You did good, but not quite there. Try again!",
        }
    }
}

/// Score of the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Cards marked known before ever being marked unknown.
    pub first_try_correct: usize,
    /// Cards in the deck.
    pub deck_size: usize,
    /// `first_try_correct / deck_size * 100`, rounded; 0 for an empty deck.
    pub accuracy_percent: u32,
    pub grade: Grade,
}

impl Summary {
    /// Score `first_try_correct` out of `deck_size`.
    pub fn new(first_try_correct: usize, deck_size: usize) -> Self {
        let accuracy_percent = if deck_size == 0 {
            0
        } else {
            // Round half up in integers so 90% and friends are exact.
            ((first_try_correct * 200 + deck_size) / (deck_size * 2)) as u32
        };
        let grade = if deck_size > 0 && first_try_correct * 100 >= EXCELLENT_THRESHOLD * deck_size
        {
            Grade::Excellent
        } else {
            Grade::KeepPracticing
        };

        Self {
            first_try_correct,
            deck_size,
            accuracy_percent,
            grade,
        }
    }

    /// Unrounded accuracy in percent.
    pub fn accuracy(&self) -> f64 {
        if self.deck_size == 0 {
            0.0
        } else {
            self.first_try_correct as f64 / self.deck_size as f64 * 100.0
        }
    }
}
