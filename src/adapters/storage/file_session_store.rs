//! File-based Session Store Adapter
//!
//! Persists the token/user blob as a JSON file, the local equivalent of the
//! browser's stored credentials.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{AuthSession, SessionUser};
use crate::ports::{SessionStore, SessionStoreError};

/// On-disk shape of a stored session.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    user: SessionUser,
}

/// File storage for the authenticated session
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by `path`; parent directories are created on save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<AuthSession>, SessionStoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::Io(e.to_string())),
        };

        let stored: StoredSession = serde_json::from_str(&json)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;

        AuthSession::new(stored.token, stored.user)
            .map(Some)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))
    }

    async fn save(&self, session: &AuthSession) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionStoreError::Io(e.to_string()))?;
        }

        let stored = StoredSession {
            token: session.token().to_string(),
            user: session.user.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }
}
