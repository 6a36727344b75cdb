//! LoadSurveyHandler - Builds the survey catalog for an authenticated student.
//!
//! The three catalog sections are fetched concurrently and degrade
//! independently: a failed section is replaced by its bundled fallback and
//! logged at warn level. Only the session checks and a rejected token on
//! the roster request stop the load.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::catalog::{
    fallback_options, fallback_professors, fallback_questions, CatalogOrigin, CatalogOrigins,
    SurveyCatalog,
};
use crate::domain::foundation::{DomainError, ErrorCode, Role, SessionUser};
use crate::ports::{ApiError, CatalogSource};

/// Command to load the survey for the current user.
#[derive(Debug, Clone)]
pub struct LoadSurveyCommand {
    /// The persisted session's user, if any.
    pub user: Option<SessionUser>,
}

/// The catalog plus where each section came from.
#[derive(Debug, Clone)]
pub struct LoadedSurvey {
    pub student: SessionUser,
    pub catalog: SurveyCatalog,
    pub origins: CatalogOrigins,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadSurveyError {
    #[error("Not authenticated as student. Please log in.")]
    NotAuthenticated,

    #[error("Only students can answer evaluations (signed in as {role})")]
    NotStudent { role: Role },

    #[error("Session expired. Please log in again.")]
    SessionExpired,
}

impl From<LoadSurveyError> for DomainError {
    fn from(err: LoadSurveyError) -> Self {
        let code = match err {
            LoadSurveyError::NotStudent { .. } => ErrorCode::Forbidden,
            LoadSurveyError::NotAuthenticated | LoadSurveyError::SessionExpired => {
                ErrorCode::Unauthorized
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// Handler for loading the survey catalog.
pub struct LoadSurveyHandler {
    source: Arc<dyn CatalogSource>,
}

impl LoadSurveyHandler {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, cmd: LoadSurveyCommand) -> Result<LoadedSurvey, LoadSurveyError> {
        // 1. Hard stops: a session must exist and belong to a student
        let student = cmd.user.ok_or(LoadSurveyError::NotAuthenticated)?;
        if !student.is_student() {
            return Err(LoadSurveyError::NotStudent { role: student.role });
        }

        tracing::debug!(user_id = %student.id, "loading survey catalog");

        // 2. Fetch all sections concurrently
        let (professors, questions, options) = tokio::join!(
            self.source.fetch_professors(),
            self.source.fetch_questions(),
            self.source.fetch_options(),
        );

        // 3. A rejected token on the roster ends the load
        let professors = match professors {
            Err(e) if e.requires_login() => {
                tracing::warn!(error = %e, "roster request rejected the session");
                return Err(LoadSurveyError::SessionExpired);
            }
            other => other,
        };

        // 4. Degrade each section independently
        let (professors, professors_origin) =
            with_fallback("professors", professors, fallback_professors);
        let (questions, questions_origin) =
            with_fallback("questions", questions, fallback_questions);
        let (options, options_origin) = with_fallback("options", options, fallback_options);

        let catalog = SurveyCatalog::new(questions, options, professors);
        let origins = CatalogOrigins {
            professors: professors_origin,
            questions: questions_origin,
            options: options_origin,
        };

        tracing::info!(
            professors = catalog.professor_count(),
            questions = catalog.question_count(),
            options = catalog.options.len(),
            fallback = origins.any_fallback(),
            "survey catalog loaded"
        );

        Ok(LoadedSurvey {
            student,
            catalog,
            origins,
        })
    }
}

fn with_fallback<T, F>(
    source: &'static str,
    result: Result<Vec<T>, ApiError>,
    fallback: F,
) -> (Vec<T>, CatalogOrigin)
where
    F: FnOnce() -> Vec<T>,
{
    match result {
        Ok(items) => (items, CatalogOrigin::Remote),
        Err(e) => {
            tracing::warn!(source, error = %e, "catalog request failed, using bundled fallback");
            (fallback(), CatalogOrigin::Fallback)
        }
    }
}
