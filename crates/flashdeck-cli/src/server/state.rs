//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use flashdeck::{CredentialStore, ProviderKind, Studio, resolve_credential};

use super::view::StudioView;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The single UI state container.
    pub studio: Arc<RwLock<Studio>>,
    /// Where the API key lives. Survives `new-deck`.
    pub credentials: Arc<dyn CredentialStore>,
    /// Completion service used for format requests.
    pub provider: ProviderKind,
    /// Model override for the provider.
    pub model: Option<String>,
}

impl AppState {
    /// Create new application state with an empty studio.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        provider: ProviderKind,
        model: Option<String>,
    ) -> Self {
        Self {
            studio: Arc::new(RwLock::new(Studio::new())),
            credentials,
            provider,
            model,
        }
    }

    /// Credential for the configured provider, stored or from the environment.
    pub fn credential(&self) -> Option<String> {
        resolve_credential(self.credentials.as_ref(), self.provider)
    }

    /// Snapshot of everything the browser renders.
    pub async fn view(&self) -> StudioView {
        let studio = self.studio.read().await;
        StudioView::new(&studio, self)
    }
}
