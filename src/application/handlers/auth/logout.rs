//! LogoutHandler - Ends the local session.
//!
//! The backend is told first, best effort; local credentials are cleared
//! regardless of its answer.

use std::sync::Arc;

use crate::ports::{
    ActivityEntry, ActivityKind, ActivityLog, AuthGateway, SessionStore, SessionStoreError,
};

/// Handler for logout.
pub struct LogoutHandler {
    auth: Arc<dyn AuthGateway>,
    store: Arc<dyn SessionStore>,
    activity: Arc<dyn ActivityLog>,
}

impl LogoutHandler {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        store: Arc<dyn SessionStore>,
        activity: Arc<dyn ActivityLog>,
    ) -> Self {
        Self {
            auth,
            store,
            activity,
        }
    }

    /// Returns false if there was no stored session.
    pub async fn handle(&self) -> Result<bool, SessionStoreError> {
        let Some(session) = self.store.load().await? else {
            return Ok(false);
        };

        if let Err(e) = self.auth.logout().await {
            tracing::warn!(error = %e, "backend logout failed, clearing local session anyway");
        }
        self.store.clear().await?;

        tracing::info!(user_id = %session.user.id, "logged out");

        let entry = ActivityEntry::new(ActivityKind::Logout, session.user.full_name(), "Logged out");
        if let Err(e) = self.activity.record(entry).await {
            tracing::warn!(error = %e, "failed to record logout");
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryActivityLog, InMemorySessionStore};
    use crate::domain::foundation::{AuthSession, Role, SessionUser, UserId};
    use crate::ports::ApiError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct OfflineAuthGateway {
        logouts: AtomicUsize,
    }

    #[async_trait]
    impl AuthGateway for OfflineAuthGateway {
        async fn login_student(&self, _matricula: &str, _name: &str) -> Result<AuthSession, ApiError> {
            Err(ApiError::network("offline"))
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.logouts.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::network("offline"))
        }
    }

    fn session() -> AuthSession {
        AuthSession::new(
            "tok-abc",
            SessionUser {
                id: UserId::new(9),
                first_name: "Laura".to_string(),
                last_name: "Méndez".to_string(),
                email: None,
                matricula: None,
                role: Role::Student,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn local_session_is_cleared_even_if_backend_fails() {
        let auth = Arc::new(OfflineAuthGateway {
            logouts: AtomicUsize::new(0),
        });
        let store = Arc::new(InMemorySessionStore::with_session(session()));
        let activity = Arc::new(InMemoryActivityLog::new());
        let handler = LogoutHandler::new(auth.clone(), store.clone(), activity.clone());

        assert!(handler.handle().await.unwrap());

        assert_eq!(auth.logouts.load(Ordering::SeqCst), 1);
        assert!(store.load().await.unwrap().is_none());
        let entries = activity.recent(1).await.unwrap();
        assert_eq!(entries[0].kind, ActivityKind::Logout);
    }

    #[tokio::test]
    async fn logout_without_session_is_a_no_op() {
        let auth = Arc::new(OfflineAuthGateway {
            logouts: AtomicUsize::new(0),
        });
        let handler = LogoutHandler::new(
            auth.clone(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(InMemoryActivityLog::new()),
        );

        assert!(!handler.handle().await.unwrap());
        assert_eq!(auth.logouts.load(Ordering::SeqCst), 0);
    }
}
