//! Serializable snapshot of the studio for the browser.

use serde::Serialize;

use flashdeck::{Face, Phase, SessionRecord, Studio, Summary};

use super::handlers::format_blocker;
use super::state::AppState;

/// The card under review, with its answer rendered.
#[derive(Debug, Serialize)]
pub struct CardView {
    pub id: String,
    pub question: String,
    /// Sanitized markup, safe to insert verbatim.
    pub answer_html: String,
}

/// Everything the browser needs to draw the current screen.
#[derive(Debug, Serialize)]
pub struct StudioView {
    pub phase: Phase,
    pub notes: String,
    pub file_name: Option<String>,
    pub loading: bool,
    pub formatting: bool,
    pub can_format: bool,
    pub error: Option<String>,
    pub card: Option<CardView>,
    pub face: Face,
    pub remaining: usize,
    pub known_count: usize,
    pub deck_size: usize,
    pub summary: Summary,
    pub grade_message: &'static str,
    pub history: Vec<SessionRecord>,
    pub provider: String,
    pub needs_credential: bool,
    pub has_credential: bool,
}

impl StudioView {
    pub fn new(studio: &Studio, state: &AppState) -> Self {
        let session = studio.session();
        let summary = session.summary();
        let card = session.current_card().map(|card| CardView {
            id: card.id.clone(),
            question: card.question.clone(),
            answer_html: card.answer_html().into_string(),
        });

        Self {
            phase: session.phase(),
            notes: studio.notes().to_string(),
            file_name: studio.file_name().map(str::to_string),
            loading: studio.is_loading(),
            formatting: studio.is_formatting(),
            can_format: format_blocker(studio).is_none(),
            error: studio.error().map(str::to_string),
            card,
            face: session.face(),
            remaining: session.remaining(),
            known_count: session.known_count(),
            deck_size: session.deck_size(),
            summary,
            grade_message: summary.grade.message(),
            history: session.history().to_vec(),
            provider: state.provider.to_string(),
            needs_credential: state.provider.needs_credential(),
            has_credential: state.credential().is_some(),
        }
    }
}
