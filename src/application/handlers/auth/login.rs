//! LoginHandler - Student login and session persistence.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{AuthSession, DomainError, ErrorCode, ValidationError};
use crate::ports::{
    ActivityEntry, ActivityKind, ActivityLog, ApiError, AuthGateway, SessionStore,
    SessionStoreError,
};

/// Command to log a student in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub matricula: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Login failed: {}", .0.user_message())]
    Api(#[from] ApiError),

    #[error("Could not store session: {0}")]
    Storage(#[from] SessionStoreError),
}

impl From<LoginError> for DomainError {
    fn from(err: LoginError) -> Self {
        let code = match &err {
            LoginError::Invalid(_) => ErrorCode::ValidationFailed,
            LoginError::Api(e) if e.requires_login() => ErrorCode::Unauthorized,
            LoginError::Api(_) => ErrorCode::InternalError,
            LoginError::Storage(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Handler for student login.
pub struct LoginHandler {
    auth: Arc<dyn AuthGateway>,
    store: Arc<dyn SessionStore>,
    activity: Arc<dyn ActivityLog>,
}

impl LoginHandler {
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

    pub async fn handle(&self, cmd: LoginCommand) -> Result<AuthSession, LoginError> {
        let matricula = cmd.matricula.trim();
        let name = cmd.name.trim();
        if matricula.is_empty() {
            return Err(ValidationError::empty_field("matricula").into());
        }
        if name.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }

        let session = self.auth.login_student(matricula, name).await?;
        self.store.save(&session).await?;

        tracing::info!(user_id = %session.user.id, role = %session.user.role, "logged in");

        let entry = ActivityEntry::new(
            ActivityKind::Login,
            session.user.full_name(),
            "Logged in",
        )
        .with_metadata("role", session.user.role);
        if let Err(e) = self.activity.record(entry).await {
            tracing::warn!(error = %e, "failed to record login");
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryActivityLog, InMemorySessionStore};
    use crate::domain::foundation::{Role, SessionUser, UserId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockAuthGateway {
        result: Result<SessionUser, ApiError>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl MockAuthGateway {
        fn accepting() -> Self {
            Self {
                result: Ok(SessionUser {
                    id: UserId::new(9),
                    first_name: "Laura".to_string(),
                    last_name: "Méndez".to_string(),
                    email: None,
                    matricula: Some("A001".to_string()),
                    role: Role::Student,
                }),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn rejecting(error: ApiError) -> Self {
            Self {
                result: Err(error),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AuthGateway for MockAuthGateway {
        async fn login_student(&self, matricula: &str, name: &str) -> Result<AuthSession, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push((matricula.to_string(), name.to_string()));
            let user = self.result.clone()?;
            Ok(AuthSession::new("tok-abc", user).unwrap())
        }

        async fn logout(&self) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn command(matricula: &str, name: &str) -> LoginCommand {
        LoginCommand {
            matricula: matricula.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn successful_login_persists_session_and_records_activity() {
        let auth = Arc::new(MockAuthGateway::accepting());
        let store = Arc::new(InMemorySessionStore::new());
        let activity = Arc::new(InMemoryActivityLog::new());
        let handler = LoginHandler::new(auth.clone(), store.clone(), activity.clone());

        let session = handler
            .handle(command("  A001 ", "Laura Méndez"))
            .await
            .unwrap();

        assert_eq!(session.token(), "tok-abc");
        assert_eq!(
            auth.calls.lock().unwrap().as_slice(),
            &[("A001".to_string(), "Laura Méndez".to_string())]
        );
        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored.user, session.user);

        let entries = activity.recent(5).await.unwrap();
        assert_eq!(entries[0].kind, ActivityKind::Login);
        assert_eq!(entries[0].user_name, "Laura Méndez");
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_calling_backend() {
        let auth = Arc::new(MockAuthGateway::accepting());
        let handler = LoginHandler::new(
            auth.clone(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(InMemoryActivityLog::new()),
        );

        let result = handler.handle(command("", "Laura")).await;

        assert!(matches!(result, Err(LoginError::Invalid(_))));
        assert!(auth.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_login_stores_nothing() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = LoginHandler::new(
            Arc::new(MockAuthGateway::rejecting(ApiError::status(
                404,
                "Student not found",
            ))),
            store.clone(),
            Arc::new(InMemoryActivityLog::new()),
        );

        let err = handler.handle(command("A999", "Nadie")).await.unwrap_err();

        assert_eq!(err.to_string(), "Login failed: Student not found");
        assert!(store.load().await.unwrap().is_none());
    }
}
