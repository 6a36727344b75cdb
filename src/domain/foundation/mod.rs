//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the survey client.

mod auth;
mod errors;
mod fixed;
mod ids;
mod likert;
mod state_machine;

pub use auth::{AuthSession, Role, SessionUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fixed::Fixed2;
pub use ids::{ProfessorId, QuestionId, SubjectId, SurveyId, UserId};
pub use likert::LikertValue;
pub use state_machine::StateMachine;
