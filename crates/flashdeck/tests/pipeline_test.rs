//! End-to-end tests: notes through a provider into a studied, saved deck.

use flashdeck::{
    Action, CredentialStore, Deck, Event, FormatError, MemoryCredentialStore, MockProvider,
    Phase, ProviderKind, Studio, deck_path, format_notes, read_notes,
};
use std::fs;
use tempfile::TempDir;

/// Run one format request through the studio the way the server does.
fn format(studio: &mut Studio, provider: &MockProvider, credential: Option<&str>, required: bool) {
    let notes = match studio.format_request(credential, required) {
        Ok(notes) => notes,
        Err(e) => {
            studio.dispatch(Action::FormatFailed(e));
            return;
        }
    };
    studio.dispatch(Action::StartFormatting);
    let action = match format_notes(provider, &notes) {
        Ok(cards) => Action::FormatSucceeded(cards),
        Err(e) => Action::FormatFailed(e),
    };
    studio.dispatch(action);
}

#[test]
fn test_notes_file_to_finished_pass() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("biology.md");
    fs::write(
        &path,
        "Mitochondria produce ATP\nRibosomes build proteins\n\nDNA stores genetic information\n",
    )
    .unwrap();

    let notes = read_notes(&path).unwrap();
    let mut studio = Studio::new();
    studio.dispatch(Action::StartFileLoad {
        name: "biology.md".into(),
    });
    studio.dispatch(Action::FileLoaded(notes));
    assert_eq!(studio.file_name(), Some("biology.md"));
    assert!(!studio.is_loading());

    let provider = MockProvider::new();
    format(&mut studio, &provider, None, false);

    assert_eq!(provider.calls(), 1);
    assert_eq!(studio.error(), None);
    assert_eq!(studio.session().deck_size(), 3);
    assert_eq!(
        studio.session().current_card().unwrap().answer,
        "Mitochondria produce ATP"
    );

    studio.dispatch(Event::MarkUnknown);
    studio.dispatch(Event::MarkKnown);
    studio.dispatch(Event::MarkKnown);
    studio.dispatch(Event::MarkKnown);

    let summary = studio.session().summary();
    assert_eq!(studio.session().phase(), Phase::Finished);
    assert_eq!(summary.first_try_correct, 2);
    assert_eq!(summary.accuracy_percent, 67);
}

#[test]
fn test_missing_credential_never_calls_provider() {
    let store = MemoryCredentialStore::new();
    let provider = MockProvider::new();
    let mut studio = Studio::new();
    studio.dispatch(Action::SetNotes("some notes".into()));

    let credential = store.get();
    format(
        &mut studio,
        &provider,
        credential.as_deref(),
        ProviderKind::OpenAI.needs_credential(),
    );

    assert_eq!(provider.calls(), 0);
    assert_eq!(studio.error(), Some("Please enter your API key."));
    assert_eq!(studio.notes(), "some notes");
    assert_eq!(studio.session().phase(), Phase::Idle);
}

#[test]
fn test_stored_credential_allows_format() {
    let store = MemoryCredentialStore::new();
    store.set("sk-test").unwrap();
    let provider = MockProvider::new();
    let mut studio = Studio::new();
    studio.dispatch(Action::SetNotes("one line".into()));

    let credential = store.get();
    format(&mut studio, &provider, credential.as_deref(), true);

    assert_eq!(provider.calls(), 1);
    assert_eq!(studio.session().phase(), Phase::Reviewing);
}

#[test]
fn test_service_failure_keeps_notes() {
    let provider = MockProvider::failing("connection refused");
    let mut studio = Studio::new();
    studio.dispatch(Action::SetNotes("keep me".into()));

    format(&mut studio, &provider, None, false);

    assert_eq!(studio.error(), Some(FormatError::Service(String::new()).user_message().as_str()));
    assert_eq!(studio.notes(), "keep me");
    assert!(!studio.is_formatting());
    assert!(studio.can_format());
}

#[test]
fn test_unparseable_reply_reports_no_cards() {
    let provider = MockProvider::with_response("Sorry, I can't help with that.");
    let mut studio = Studio::new();
    studio.dispatch(Action::SetNotes("notes".into()));

    format(&mut studio, &provider, None, false);

    assert_eq!(
        studio.error(),
        Some("The AI couldn't format the notes into flashcards. Please check the notes or try again.")
    );
    assert_eq!(studio.session().phase(), Phase::Idle);
}

#[test]
fn test_structural_reply_is_accepted() {
    let provider =
        MockProvider::with_response("# What is Rust?\n\nA systems language.\n\n# Who makes it?\n\nThe Rust project.");
    let mut studio = Studio::new();
    studio.dispatch(Action::SetNotes("notes".into()));

    format(&mut studio, &provider, None, false);

    assert_eq!(studio.session().deck_size(), 2);
    assert_eq!(
        studio.session().current_card().unwrap().question,
        "What is Rust?"
    );
}

#[test]
fn test_studied_deck_saves_and_reloads() {
    let dir = TempDir::new().unwrap();
    let notes_path = dir.path().join("chem.md");
    let provider = MockProvider::with_response("Q: H2O?\nA: Water\n\nQ: NaCl?\nA: Salt");
    let cards = format_notes(&provider, "chem notes").unwrap();

    let deck = Deck::new(cards.clone());
    let out = deck_path(&notes_path);
    deck.save(&out).unwrap();
    assert!(out.ends_with("chem.deck.json"));

    let loaded = Deck::load(&out).unwrap();
    assert_eq!(loaded.cards(), cards.as_slice());
    assert_eq!(loaded.created_at, deck.created_at);

    let mut studio = Studio::new();
    studio.dispatch(Action::FormatSucceeded(loaded.cards().to_vec()));
    assert_eq!(studio.session().deck_size(), 2);
}

#[test]
fn test_new_deck_returns_to_creation() {
    let provider = MockProvider::with_response("Q: A?\nA: B");
    let mut studio = Studio::new();
    studio.dispatch(Action::SetNotes("n".into()));
    format(&mut studio, &provider, None, false);
    studio.dispatch(Event::MarkKnown);
    studio.dispatch(Event::RestartPass);
    assert_eq!(studio.session().history().len(), 1);

    studio.dispatch(Event::NewDeck);

    assert_eq!(studio.session().phase(), Phase::Idle);
    assert!(studio.session().history().is_empty());
    assert!(studio.notes().is_empty());
    assert_eq!(studio.error(), None);
}
