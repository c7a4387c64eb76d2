//! # Credential Store
//!
//! Persists the single static API credential across sessions: read once at
//! startup, written on explicit save. A missing or unreadable file simply
//! means "no credential", which in turn means the gateway omits the auth
//! header entirely.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// File-backed storage for the API key.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// The store never guesses a location; the caller decides where the
    /// credential lives.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the saved credential. Whitespace is trimmed; an empty or
    /// missing file reads as `None`.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let key = contents.trim();
                if key.is_empty() {
                    None
                } else {
                    Some(key.to_string())
                }
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no stored credential");
                None
            }
        }
    }

    /// Writes the credential, creating parent directories as needed.
    pub fn save(&self, api_key: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, api_key.trim())?;
        debug!(path = %self.path.display(), "credential saved");
        Ok(())
    }
}
