//! Errors shared by every port backed by the REST API.

use thiserror::Error;

/// Failure of one API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No session available; the request was never sent.
    #[error("not authenticated, please log in again")]
    NotAuthenticated,

    /// Backend rejected the token (HTTP 401). Stored credentials are cleared.
    #[error("session expired or invalid")]
    Unauthorized,

    /// Any other non-2xx response.
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The body's `error` field, or a generic description.
        message: String,
    },

    /// Transport failure before a response was received.
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Response body does not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Creates a status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Returns true if the caller has to log in again.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated | ApiError::Unauthorized)
    }

    /// Text reported to the student for a failed submission.
    ///
    /// Backend rejections carry their own message; everything else uses the
    /// error's display text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_code_and_message() {
        let err = ApiError::status(400, "Survey already completed");
        assert_eq!(
            err.to_string(),
            "request failed with status 400: Survey already completed"
        );
        assert_eq!(err.user_message(), "Survey already completed");
    }

    #[test]
    fn login_required_for_missing_or_rejected_session() {
        assert!(ApiError::NotAuthenticated.requires_login());
        assert!(ApiError::Unauthorized.requires_login());
        assert!(!ApiError::Timeout.requires_login());
        assert!(!ApiError::network("refused").requires_login());
    }
}
