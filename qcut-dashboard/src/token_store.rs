//! Persisted session token
//!
//! One durable entry holding the bearer token, read at startup and
//! written/cleared on login/logout. Stored as a single file under the
//! app data directory.

use std::io;
use std::path::{Path, PathBuf};

/// File-backed store for the session bearer token
#[derive(Debug, Clone)]
pub struct TokenStore {
    file_path: PathBuf,
}

impl TokenStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("auth/token"),
        }
    }

    /// Path of the token file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the persisted token, if any
    pub fn load(&self) -> io::Result<Option<String>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let token = std::fs::read_to_string(&self.file_path)?;
        let token = token.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token.to_string()))
    }

    /// Persist the token, creating the auth directory if needed
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.file_path, token)?;
        tracing::debug!(path = %self.file_path.display(), "Session token saved");
        Ok(())
    }

    /// Remove the persisted token
    pub fn clear(&self) -> io::Result<()> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Session token cleared");
        }
        Ok(())
    }
}
