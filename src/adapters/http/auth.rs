//! HttpAuthGateway - student login and logout.

use async_trait::async_trait;
use std::sync::Arc;

use super::dto::{LoginResponse, MessageResponse, StudentLoginRequest};
use super::ApiClient;
use crate::domain::foundation::AuthSession;
use crate::ports::{ApiError, AuthGateway};

#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login_student(&self, matricula: &str, name: &str) -> Result<AuthSession, ApiError> {
        let request = StudentLoginRequest::new(matricula, name);
        let response: LoginResponse = self
            .client
            .post_json_anonymous("/auth/login", &request)
            .await?;

        tracing::debug!(user_id = %response.user.id, message = %response.message, "login accepted");

        AuthSession::new(response.token, response.user)
            .map_err(|e| ApiError::decode(format!("Invalid login response: {}", e)))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response: MessageResponse = self
            .client
            .post_json("/auth/logout", &serde_json::json!({}))
            .await?;
        tracing::debug!(message = %response.message, "logout acknowledged");
        Ok(())
    }
}
