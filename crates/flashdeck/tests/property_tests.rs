//! Property-based tests for extraction and the review session.
//!
//! These tests use proptest to generate random inputs and event sequences
//! and check that the session bookkeeping invariants always hold.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p flashdeck --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p flashdeck --test property_tests
//! ```

use std::collections::BTreeMap;

use proptest::prelude::*;

use flashdeck::{Event, Flashcard, Phase, Session, extract};

// =============================================================================
// Test Strategies
// =============================================================================

fn deck_strategy() -> impl Strategy<Value = Vec<Flashcard>> {
    (0usize..12).prop_map(|n| {
        (0..n)
            .map(|i| Flashcard::new(format!("card-{i}"), format!("Q{i}"), format!("A{i}")))
            .collect()
    })
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        3 => Just(Event::MarkKnown),
        3 => Just(Event::MarkUnknown),
        2 => Just(Event::Flip),
        1 => Just(Event::RestartPass),
    ]
}

/// Single-line text without the markers or leading/trailing whitespace.
fn field_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ?,.]{0,30}[a-zA-Z0-9?.]"
}

fn id_counts<'a>(cards: impl Iterator<Item = &'a Flashcard>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.id.clone()).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Session Invariants
// =============================================================================

proptest! {
    #[test]
    fn prop_queue_and_known_partition_deck(
        cards in deck_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut session = Session::new().reduce(Event::LoadDeck(cards.clone()));
        let deck_ids = id_counts(cards.iter());

        for event in events {
            session.dispatch(event);

            let mut seen = id_counts(session.queue());
            for (id, n) in id_counts(session.known().iter()) {
                *seen.entry(id).or_insert(0) += n;
            }
            prop_assert_eq!(&seen, &deck_ids);
            prop_assert!(session.first_try_correct() <= cards.len());
            prop_assert!(session.first_try_correct() <= session.known_count());
        }
    }

    #[test]
    fn prop_history_attempts_are_contiguous(
        cards in deck_strategy(),
        events in prop::collection::vec(event_strategy(), 0..80),
    ) {
        let mut session = Session::new().reduce(Event::LoadDeck(cards));
        for event in events {
            session.dispatch(event);
        }

        for (i, record) in session.history().iter().enumerate() {
            prop_assert_eq!(record.attempt as usize, i + 1);
            prop_assert!(record.accuracy <= 100);
        }
    }

    #[test]
    fn prop_restart_appends_exactly_one_record(cards in deck_strategy()) {
        prop_assume!(!cards.is_empty());
        let mut session = Session::new().reduce(Event::LoadDeck(cards.clone()));
        for _ in 0..cards.len() {
            session.dispatch(Event::MarkKnown);
        }
        prop_assert_eq!(session.phase(), Phase::Finished);

        session.dispatch(Event::RestartPass);
        prop_assert_eq!(session.history().len(), 1);
        prop_assert_eq!(session.history()[0].accuracy, 100);
        prop_assert_eq!(session.deck().map(|d| d.cards().to_vec()), Some(cards));
    }

    #[test]
    fn prop_missed_then_known_is_not_first_try(
        cards in deck_strategy(),
        missed in prop::collection::vec(any::<bool>(), 12),
    ) {
        let n = cards.len();
        let mut session = Session::new().reduce(Event::LoadDeck(cards));

        // First presentation of every card: miss some, know the rest.
        let mut expected = 0;
        for miss in missed.iter().take(n) {
            if *miss {
                session.dispatch(Event::MarkUnknown);
            } else {
                session.dispatch(Event::MarkKnown);
                expected += 1;
            }
        }
        // Then know everything that came back.
        while session.current_card().is_some() {
            session.dispatch(Event::MarkKnown);
        }

        prop_assert_eq!(session.first_try_correct(), expected);
        prop_assert_eq!(session.known_count(), n);
    }

    #[test]
    fn prop_flip_never_changes_queue(cards in deck_strategy(), flips in 0usize..10) {
        let mut session = Session::new().reduce(Event::LoadDeck(cards));
        let before: Vec<String> = session.queue().map(|c| c.id.clone()).collect();
        for _ in 0..flips {
            session.dispatch(Event::Flip);
        }
        let after: Vec<String> = session.queue().map(|c| c.id.clone()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_new_deck_always_idle(
        cards in deck_strategy(),
        events in prop::collection::vec(event_strategy(), 0..30),
    ) {
        let mut session = Session::new().reduce(Event::LoadDeck(cards));
        for event in events {
            session.dispatch(event);
        }
        session.dispatch(Event::NewDeck);
        prop_assert_eq!(session.phase(), Phase::Idle);
        prop_assert!(session.history().is_empty());
    }
}

// =============================================================================
// Extraction Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_extract_never_panics(raw in "\\PC{0,200}") {
        let _ = extract(&raw);
    }

    #[test]
    fn prop_delimited_pairs_recovered(
        fields in prop::collection::vec((field_text(), field_text()), 1..8),
    ) {
        let raw: String = fields
            .iter()
            .map(|(q, a)| format!("Q: {q}\nA: {a}\n\n"))
            .collect();
        let cards = extract(&raw);

        prop_assert_eq!(cards.len(), fields.len());
        for (i, (card, (q, a))) in cards.iter().zip(&fields).enumerate() {
            prop_assert_eq!(&card.id, &format!("card-{i}"));
            prop_assert_eq!(&card.question, q);
            prop_assert_eq!(&card.answer, a);
        }
    }

    #[test]
    fn prop_extracted_ids_are_unique(raw in "(Q: [a-z]{1,5}\nA: [a-z]{1,5}\n|# [a-z]{1,5}\n[a-z]{1,5}\n\n){0,10}") {
        let cards = extract(&raw);
        let ids = id_counts(cards.iter());
        prop_assert_eq!(ids.len(), cards.len());
    }
}
