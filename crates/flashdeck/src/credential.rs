//! Storage for the completion-service credential.
//!
//! The credential is the only persisted state. It is read once at startup
//! and written every time the user changes it; setting an empty value
//! clears it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{FlashdeckError, Result};
use crate::llm::ProviderKind;

/// Environment variable overriding the credential file location.
pub const CREDENTIAL_FILE_ENV: &str = "FLASHDECK_CREDENTIAL_FILE";

/// Where the credential lives.
pub trait CredentialStore: Send + Sync {
    /// The stored credential, if any.
    fn get(&self) -> Option<String>;

    /// Replace the stored credential. An empty value clears it.
    fn set(&self, value: &str) -> Result<()>;
}

/// Credential kept in memory only.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    value: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            value: RwLock::new((!value.is_empty()).then_some(value)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.value.read().ok().and_then(|v| v.clone())
    }

    fn set(&self, value: &str) -> Result<()> {
        let mut guard = self
            .value
            .write()
            .map_err(|_| FlashdeckError::Credential("credential lock poisoned".to_string()))?;
        *guard = (!value.is_empty()).then(|| value.to_string());
        Ok(())
    }
}

/// Credential persisted as a single line in a file.
///
/// The file content is cached after the first read, so `get` does not
/// touch the disk again.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl FileCredentialStore {
    /// Open the store at `path`, reading any existing credential.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cached = match fs::read_to_string(&path) {
            Ok(content) => {
                let value = content.trim().to_string();
                (!value.is_empty()).then_some(value)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => return Err(FlashdeckError::Io { path, source }),
        };
        log::debug!(
            "credential store at {} ({})",
            path.display(),
            if cached.is_some() { "set" } else { "empty" }
        );

        Ok(Self {
            path,
            cached: RwLock::new(cached),
        })
    }

    /// Open the store at [`default_credential_path`].
    pub fn open_default() -> Result<Self> {
        Self::open(default_credential_path()?)
    }

    /// Location of the credential file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, value: &str) -> Result<()> {
        if value.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(FlashdeckError::Io {
                    path: self.path.clone(),
                    source: e,
                }),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| FlashdeckError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, value).map_err(|source| FlashdeckError::Io {
            path: self.path.clone(),
            source,
        })?;
        restrict_permissions(&self.path);
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<String> {
        self.cached.read().ok().and_then(|v| v.clone())
    }

    fn set(&self, value: &str) -> Result<()> {
        let value = value.trim();
        self.write_file(value)?;

        let mut guard = self
            .cached
            .write()
            .map_err(|_| FlashdeckError::Credential("credential lock poisoned".to_string()))?;
        *guard = (!value.is_empty()).then(|| value.to_string());
        Ok(())
    }
}

/// Default credential file: `$FLASHDECK_CREDENTIAL_FILE`, otherwise
/// `<config dir>/flashdeck/credential`.
pub fn default_credential_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CREDENTIAL_FILE_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    dirs::config_dir()
        .map(|dir| dir.join("flashdeck").join("credential"))
        .ok_or_else(|| {
            FlashdeckError::Credential("could not determine a config directory".to_string())
        })
}

/// Credential to use with `kind`: the stored one, otherwise the
/// provider's environment variable.
pub fn resolve_credential(store: &dyn CredentialStore, kind: ProviderKind) -> Option<String> {
    store.get().or_else(|| {
        kind.credential_env_var()
            .and_then(|var| std::env::var(var).ok())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Mask a credential for display, keeping only its last four characters.
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        log::warn!("could not restrict permissions on {}: {}", path.display(), e);
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}
