//! The format request: notes in, deck out.

use axum::{Json, extract::State};

use flashdeck::{Action, FormatError, Phase, Studio, format_notes};

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::view::StudioView;

/// Why a format request cannot start now, if it cannot.
pub fn format_blocker(studio: &Studio) -> Option<&'static str> {
    if studio.is_formatting() {
        Some("a format request is already in flight")
    } else if studio.is_loading() {
        Some("a notes file is still loading")
    } else if studio.session().phase() != Phase::Idle {
        Some("a deck is loaded; start a new deck first")
    } else {
        None
    }
}

/// POST /api/format
///
/// Checks the inputs, then calls the completion service off the async
/// runtime. Only one request may be in flight; a second gets 409.
pub async fn format(State(state): State<AppState>) -> Result<Json<StudioView>, ApiError> {
    let credential = state.credential();

    let notes = {
        let mut studio = state.studio.write().await;
        if let Some(reason) = format_blocker(&studio) {
            return Err(ApiError::Conflict(reason.to_string()));
        }
        match studio.format_request(credential.as_deref(), state.provider.needs_credential()) {
            Ok(notes) => {
                studio.dispatch(Action::StartFormatting);
                notes
            }
            Err(e) => {
                studio.dispatch(Action::FormatFailed(e));
                return Ok(Json(StudioView::new(&studio, &state)));
            }
        }
    };

    let kind = state.provider;
    let model = state.model.clone();
    let result = tokio::task::spawn_blocking(move || {
        let provider = kind
            .build(credential.as_deref(), model.as_deref())
            .map_err(|e| FormatError::Service(e.to_string()))?;
        format_notes(provider.as_ref(), &notes)
    })
    .await;

    let action = match result {
        Ok(Ok(cards)) => Action::FormatSucceeded(cards),
        Ok(Err(e)) => {
            if let Some(detail) = e.detail() {
                log::warn!("format failed: {}", detail);
            }
            Action::FormatFailed(e)
        }
        Err(e) => {
            log::error!("format task failed: {}", e);
            Action::FormatFailed(FormatError::Service(e.to_string()))
        }
    };

    let mut studio = state.studio.write().await;
    studio.dispatch(action);
    Ok(Json(StudioView::new(&studio, &state)))
}
