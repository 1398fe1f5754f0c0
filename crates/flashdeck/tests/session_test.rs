//! Integration tests for the review session.

use flashdeck::{Event, Face, Flashcard, Grade, Phase, Session, SessionRecord, extract};

fn deck(n: usize) -> Vec<Flashcard> {
    let text: String = (0..n)
        .map(|i| format!("Q: Question {i}?\nA: Answer {i}\n\n"))
        .collect();
    extract(&text)
}

fn review(session: &mut Session, grades: &[bool]) {
    for &known in grades {
        session.dispatch(Event::Flip);
        session.dispatch(if known {
            Event::MarkKnown
        } else {
            Event::MarkUnknown
        });
    }
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_fresh_deck_scores_zero() {
    let session = Session::new().reduce(Event::LoadDeck(deck(5)));
    assert_eq!(session.summary().accuracy_percent, 0);
    assert_eq!(session.phase(), Phase::Reviewing);
}

#[test]
fn test_last_card_finishes_regardless_of_retries() {
    let mut session = Session::new().reduce(Event::LoadDeck(deck(1)));
    review(&mut session, &[false, false, false]);
    assert_eq!(session.phase(), Phase::Reviewing);

    review(&mut session, &[true]);
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.remaining(), 0);
    assert!(session.current_card().is_none());
}

#[test]
fn test_full_pass_and_restart() {
    let mut session = Session::new().reduce(Event::LoadDeck(deck(4)));

    // Miss the first two, know the rest, then know the missed ones.
    review(&mut session, &[false, false, true, true, true, true]);
    assert_eq!(session.phase(), Phase::Finished);

    let summary = session.summary();
    assert_eq!(summary.first_try_correct, 2);
    assert_eq!(summary.accuracy_percent, 50);
    assert_eq!(summary.grade, Grade::KeepPracticing);

    session.dispatch(Event::RestartPass);
    assert_eq!(
        session.history(),
        &[SessionRecord {
            attempt: 1,
            accuracy: 50
        }]
    );
    assert_eq!(session.phase(), Phase::Reviewing);
    assert_eq!(session.face(), Face::Question);

    review(&mut session, &[true, true, true, true]);
    session.dispatch(Event::RestartPass);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].accuracy, 100);
}

#[test]
fn test_deferred_cards_keep_fifo_order() {
    let mut session = Session::new().reduce(Event::LoadDeck(deck(3)));
    review(&mut session, &[false, false]);

    let order: Vec<&str> = session.queue().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["card-2", "card-0", "card-1"]);
}

#[test]
fn test_restart_never_mutates_deck() {
    let cards = deck(3);
    let mut session = Session::new().reduce(Event::LoadDeck(cards.clone()));
    review(&mut session, &[false, true, true, true]);
    session.dispatch(Event::RestartPass);

    assert_eq!(session.deck().map(|d| d.cards().to_vec()), Some(cards));
}

#[test]
fn test_excellent_with_one_retry_in_ten() {
    let mut session = Session::new().reduce(Event::LoadDeck(deck(10)));
    review(&mut session, &[true, true, true, false, true, true, true, true, true, true, true]);

    let summary = session.summary();
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(summary.accuracy_percent, 90);
    assert_eq!(summary.grade, Grade::Excellent);
}

#[test]
fn test_new_deck_mid_review_clears_history() {
    let mut session = Session::new().reduce(Event::LoadDeck(deck(1)));
    review(&mut session, &[true]);
    session.dispatch(Event::RestartPass);
    review(&mut session, &[false]);

    session.dispatch(Event::NewDeck);
    assert!(session.history().is_empty());
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_reloading_same_content_clears_history() {
    let cards = deck(2);
    let mut session = Session::new().reduce(Event::LoadDeck(cards.clone()));
    review(&mut session, &[true, true]);
    session.dispatch(Event::RestartPass);

    session.dispatch(Event::LoadDeck(cards));
    assert!(session.history().is_empty());
}
