//! SessionStore port - persistence of the authenticated session.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::AuthSession;

/// Errors that can occur while reading or writing the stored session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("stored session is corrupt: {0}")]
    Corrupt(String),
}

/// Persisted token/user blob.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored session, or `None` when nobody is logged in.
    async fn load(&self) -> Result<Option<AuthSession>, SessionStoreError>;

    /// Replaces the stored session.
    async fn save(&self, session: &AuthSession) -> Result<(), SessionStoreError>;

    /// Removes the stored session. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
