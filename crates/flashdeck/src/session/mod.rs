//! The review session state machine.
//!
//! A [`Session`] holds the deck, the working queue of cards still to
//! review, and the bookkeeping needed to score a pass. It changes only
//! through [`Event`]s applied by [`Session::reduce`], a pure function from
//! one state to the next.
//!
//! ```text
//!            LoadDeck                MarkKnown (last card)
//!   Idle ─────────────▶ Reviewing ─────────────────────▶ Finished
//!    ▲                     ▲                                │
//!    │                     └────────── RestartPass ─────────┤
//!    └──────────────────────── NewDeck ─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use flashdeck::{Event, Flashcard, Phase, Session};
//!
//! let cards = vec![
//!     Flashcard::new("card-0", "What is 2+2?", "4"),
//!     Flashcard::new("card-1", "Capital of France?", "Paris"),
//! ];
//!
//! let session = Session::new()
//!     .reduce(Event::LoadDeck(cards))
//!     .reduce(Event::MarkUnknown)
//!     .reduce(Event::MarkKnown)
//!     .reduce(Event::MarkKnown);
//!
//! assert_eq!(session.phase(), Phase::Finished);
//! assert_eq!(session.summary().accuracy_percent, 50);
//! ```

mod event;
mod machine;
mod record;

pub use event::Event;
pub use machine::{Face, Phase, Session};
pub use record::{EXCELLENT_THRESHOLD, Grade, SessionRecord, Summary};
