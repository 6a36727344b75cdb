//! AuthGateway port - obtaining and ending a session.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::foundation::AuthSession;

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Logs a student in by enrollment number and name.
    async fn login_student(&self, matricula: &str, name: &str) -> Result<AuthSession, ApiError>;

    /// Tells the backend the session is over. The caller discards the token.
    async fn logout(&self) -> Result<(), ApiError>;
}
