//! In-Memory Session Store Adapter
//!
//! Useful for testing and for hosts that must not touch the disk.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::AuthSession;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for the authenticated session
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    session: Arc<RwLock<Option<AuthSession>>>,
    clears: Arc<AtomicUsize>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a stored session.
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(session))),
            clears: Arc::default(),
        }
    }

    /// Number of times `clear` was called.
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<AuthSession>, SessionStoreError> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &AuthSession) -> Result<(), SessionStoreError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.session.write().await = None;
        Ok(())
    }
}
