//! Handlers for the notes editor, file upload and review actions.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
};
use serde::Deserialize;

use flashdeck::{Action, Event, decode_notes, is_supported_notes_file};

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::view::StudioView;

/// Request body for replacing the notes text.
#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}

/// Query for a file upload.
#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub name: Option<String>,
}

/// Apply one action and return the resulting view.
async fn apply(state: &AppState, action: impl Into<Action>) -> Json<StudioView> {
    let mut studio = state.studio.write().await;
    studio.dispatch(action);
    Json(StudioView::new(&studio, state))
}

/// GET /api/state
pub async fn get_state(State(state): State<AppState>) -> Json<StudioView> {
    Json(state.view().await)
}

/// POST /api/notes
pub async fn set_notes(
    State(state): State<AppState>,
    Json(req): Json<NotesRequest>,
) -> Json<StudioView> {
    apply(&state, Action::SetNotes(req.notes)).await
}

/// POST /api/file?name=notes.md - raw file bytes in the body.
///
/// The file replaces the notes text. An unreadable file sets the
/// file-read error and leaves the notes and deck alone.
pub async fn load_file(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
    body: Bytes,
) -> Result<Json<StudioView>, ApiError> {
    let name = query
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing file name".to_string()))?;

    let mut studio = state.studio.write().await;
    studio.dispatch(Action::StartFileLoad { name: name.clone() });

    let decoded = if is_supported_notes_file(&name) {
        decode_notes(&body)
    } else {
        Err(flashdeck::FlashdeckError::Decode(format!(
            "unsupported file type: {}",
            name
        )))
    };
    match decoded {
        Ok(text) => {
            log::info!("loaded {} ({} bytes)", name, body.len());
            studio.dispatch(Action::FileLoaded(text));
        }
        Err(e) => {
            log::warn!("could not read {}: {}", name, e);
            studio.dispatch(Action::FileLoadFailed);
        }
    }

    Ok(Json(StudioView::new(&studio, &state)))
}

/// POST /api/flip
pub async fn flip(State(state): State<AppState>) -> Json<StudioView> {
    apply(&state, Event::Flip).await
}

/// POST /api/known
pub async fn mark_known(State(state): State<AppState>) -> Json<StudioView> {
    apply(&state, Event::MarkKnown).await
}

/// POST /api/unknown
pub async fn mark_unknown(State(state): State<AppState>) -> Json<StudioView> {
    apply(&state, Event::MarkUnknown).await
}

/// POST /api/restart
pub async fn restart(State(state): State<AppState>) -> Json<StudioView> {
    apply(&state, Event::RestartPass).await
}

/// POST /api/new-deck
pub async fn new_deck(State(state): State<AppState>) -> Json<StudioView> {
    apply(&state, Event::NewDeck).await
}
