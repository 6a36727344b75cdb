//! Response schemas of the REST backend.
//!
//! Every field the client relies on is required; a body missing one fails
//! to decode instead of propagating an absent value.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{LikertOption, Professor, Question, Subject};
use crate::domain::foundation::{ProfessorId, SessionUser, SurveyId};
use crate::domain::survey::{SurveyStatus, SurveySummary};
use crate::ports::ApiError;

/// `GET /student/professors`
#[derive(Debug, Deserialize)]
pub struct ProfessorsResponse {
    pub professors: Vec<ProfessorDto>,
}

#[derive(Debug, Deserialize)]
pub struct ProfessorDto {
    pub id: ProfessorId,
    pub name: String,
    pub subjects: Vec<Subject>,
}

impl ProfessorsResponse {
    pub fn into_domain(self) -> Vec<Professor> {
        self.professors
            .into_iter()
            .map(|p| Professor::with_subjects(p.id, p.name, p.subjects))
            .collect()
    }
}

/// `GET /survey/questions`
#[derive(Debug, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

impl QuestionsResponse {
    pub fn into_domain(self) -> Result<Vec<Question>, ApiError> {
        if self.questions.is_empty() {
            return Err(ApiError::decode("question catalog is empty"));
        }
        Ok(self.questions)
    }
}

/// `GET /survey/options`
#[derive(Debug, Deserialize)]
pub struct OptionsResponse {
    pub options: Vec<LikertOption>,
}

impl OptionsResponse {
    pub fn into_domain(self) -> Result<Vec<LikertOption>, ApiError> {
        if self.options.is_empty() {
            return Err(ApiError::decode("option catalog is empty"));
        }
        Ok(self.options)
    }
}

/// `GET /student/surveys`
#[derive(Debug, Deserialize)]
pub struct SurveysResponse {
    pub surveys: Vec<SurveyDto>,
}

#[derive(Debug, Deserialize)]
pub struct SurveyDto {
    pub id: SurveyId,
    pub status: SurveyStatus,
    pub professor: ProfessorRef,
}

#[derive(Debug, Deserialize)]
pub struct ProfessorRef {
    pub id: ProfessorId,
}

impl SurveysResponse {
    pub fn into_domain(self) -> Vec<SurveySummary> {
        self.surveys
            .into_iter()
            .map(|s| SurveySummary {
                id: s.id,
                status: s.status,
                professor_id: s.professor.id,
            })
            .collect()
    }
}

/// `POST /auth/login` body for students.
#[derive(Debug, Serialize)]
pub struct StudentLoginRequest<'a> {
    pub role: &'static str,
    pub matricula: &'a str,
    pub name: &'a str,
}

impl<'a> StudentLoginRequest<'a> {
    pub fn new(matricula: &'a str, name: &'a str) -> Self {
        Self {
            role: "student",
            matricula,
            name,
        }
    }
}

/// `POST /auth/login` response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: SessionUser,
}

/// `POST /auth/logout` response.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
