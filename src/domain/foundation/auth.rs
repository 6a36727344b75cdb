//! Authentication types for the domain layer.
//!
//! An `AuthSession` is the explicit session context of the survey client: the
//! bearer token issued by the backend plus the user it belongs to. It is
//! created by the login flow (or loaded from the session store) and handed to
//! the loader and the HTTP adapters at construction time.
//!
//! The token is wrapped in `secrecy::Secret` so it never shows up in `Debug`
//! output or logs.

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{UserId, ValidationError};

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Professor,
    Admin,
    Coordinator,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Returns the wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professor => "professor",
            Role::Admin => "admin",
            Role::Coordinator => "coordinator",
            Role::Unknown => "unknown",
        }
    }

    /// Returns the label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Estudiante",
            Role::Professor => "Profesor",
            Role::Admin => "Administrador",
            Role::Coordinator => "Coordinador",
            Role::Unknown => "Desconocido",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user a session belongs to, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub matricula: Option<String>,
    pub role: Role,
}

impl SessionUser {
    /// Returns "first last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Returns true if this user may answer evaluation surveys.
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

/// Authenticated session: bearer token plus user.
#[derive(Debug, Clone)]
pub struct AuthSession {
    token: Secret<String>,
    pub user: SessionUser,
}

impl AuthSession {
    /// Creates a session, rejecting an empty token.
    pub fn new(token: impl Into<String>, user: SessionUser) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        Ok(Self {
            token: Secret::new(token),
            user,
        })
    }

    /// Exposes the bearer token (for building the Authorization header).
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}
