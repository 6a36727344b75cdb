//! ApiClient - shared reqwest wrapper for the REST backend.
//!
//! Owns the explicit session context: the bearer token comes from the
//! `AuthSession` handed in at construction, never from ambient storage.
//!
//! # Behaviour
//!
//! - Authenticated calls without a session fail with
//!   `ApiError::NotAuthenticated` before any network round-trip.
//! - A 401 on an authenticated call clears the session store, marks the
//!   client expired and returns `ApiError::Unauthorized`. Every later
//!   authenticated call short-circuits.
//! - Bodies are decoded into strict response schemas; a mismatch is
//!   `ApiError::Decode`.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::domain::foundation::AuthSession;
use crate::ports::{ApiError, SessionStore};

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the evaluation backend.
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    client: Client,
    session: Option<AuthSession>,
    store: Arc<dyn SessionStore>,
    expired: AtomicBool,
}

impl ApiClient {
    /// Creates a client for the configured backend.
    pub fn new(
        config: &ApiConfig,
        session: Option<AuthSession>,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            timeout: config.timeout(),
            client,
            session,
            store,
            expired: AtomicBool::new(false),
        })
    }

    /// The session requests are made with, if any.
    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// True once the backend has rejected the token.
    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::SeqCst)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn bearer_token(&self) -> Result<&str, ApiError> {
        match &self.session {
            Some(session) if !self.is_expired() => Ok(session.token()),
            _ => Err(ApiError::NotAuthenticated),
        }
    }

    /// Authenticated GET decoding the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let token = self.bearer_token()?;
        let request = self.client.get(self.url(path)).bearer_auth(token);
        let response = self.send(request).await?;
        let response = self.handle_response_status(response, true).await?;
        Self::decode(response).await
    }

    /// Authenticated POST with a JSON body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let token = self.bearer_token()?;
        let request = self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body);
        let response = self.send(request).await?;
        let response = self.handle_response_status(response, true).await?;
        Self::decode(response).await
    }

    /// POST without credentials (login).
    pub async fn post_json_anonymous<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.send(request).await?;
        let response = self.handle_response_status(response, false).await?;
        Self::decode(response).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::debug!(timeout_secs = self.timeout.as_secs(), "request timed out");
                ApiError::Timeout
            } else if e.is_connect() {
                ApiError::network(format!("Connection failed: {}", e))
            } else {
                ApiError::network(e.to_string())
            }
        })
    }

    /// Maps non-2xx statuses to `ApiError`.
    async fn handle_response_status(
        &self,
        response: Response,
        authenticated: bool,
    ) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 401 && authenticated {
            self.invalidate_session().await;
            return Err(ApiError::Unauthorized);
        }

        let error_body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&error_body)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Err(ApiError::status(status.as_u16(), message))
    }

    async fn invalidate_session(&self) {
        self.expired.store(true, Ordering::SeqCst);
        tracing::warn!("backend rejected the session token, clearing stored credentials");

        if let Err(e) = self.store.clear().await {
            tracing::warn!(error = %e, "failed to clear stored session");
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("session", &self.session)
            .field("expired", &self.is_expired())
            .finish()
    }
}
