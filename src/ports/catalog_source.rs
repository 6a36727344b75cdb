//! CatalogSource port - where questions, options and the roster come from.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::catalog::{LikertOption, Professor, Question};

/// Source of the three catalog sections.
///
/// Each fetch fails independently; callers decide whether to fall back.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Professors the authenticated student must evaluate.
    async fn fetch_professors(&self) -> Result<Vec<Professor>, ApiError>;

    /// Ordered evaluation questions.
    async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError>;

    /// Likert options shared by every question.
    async fn fetch_options(&self) -> Result<Vec<LikertOption>, ApiError>;
}
