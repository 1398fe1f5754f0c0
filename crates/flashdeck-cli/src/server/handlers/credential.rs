//! API key handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use flashdeck::mask;

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::view::StudioView;

/// Request body for storing the API key. Empty clears it.
#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    pub value: String,
}

/// Credential status. The key itself never leaves the server.
#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub provider: String,
    pub required: bool,
    pub set: bool,
    pub masked: Option<String>,
}

/// GET /api/credential
pub async fn get_credential(State(state): State<AppState>) -> Json<CredentialResponse> {
    let credential = state.credential();
    Json(CredentialResponse {
        provider: state.provider.to_string(),
        required: state.provider.needs_credential(),
        set: credential.is_some(),
        masked: credential.as_deref().map(mask),
    })
}

/// PUT /api/credential
pub async fn put_credential(
    State(state): State<AppState>,
    Json(req): Json<CredentialRequest>,
) -> Result<Json<StudioView>, ApiError> {
    state.credentials.set(req.value.trim())?;
    log::info!(
        "api key {}",
        if req.value.trim().is_empty() { "cleared" } else { "updated" }
    );
    Ok(Json(state.view().await))
}
