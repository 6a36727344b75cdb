//! Mock CatalogSource for testing and offline runs.
//!
//! Each section returns its configured result; unconfigured sections
//! return the bundled fallback data.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::catalog::{
    fallback_options, fallback_professors, fallback_questions, LikertOption, Professor, Question,
};
use crate::ports::{ApiError, CatalogSource};

#[derive(Debug, Clone)]
pub struct MockCatalogSource {
    professors: Result<Vec<Professor>, ApiError>,
    questions: Result<Vec<Question>, ApiError>,
    options: Result<Vec<LikertOption>, ApiError>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self {
            professors: Ok(fallback_professors()),
            questions: Ok(fallback_questions()),
            options: Ok(fallback_options()),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_professors(mut self, professors: Vec<Professor>) -> Self {
        self.professors = Ok(professors);
        self
    }

    pub fn with_professors_error(mut self, error: ApiError) -> Self {
        self.professors = Err(error);
        self
    }

    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = Ok(questions);
        self
    }

    pub fn with_questions_error(mut self, error: ApiError) -> Self {
        self.questions = Err(error);
        self
    }

    pub fn with_options_error(mut self, error: ApiError) -> Self {
        self.options = Err(error);
        self
    }

    /// Sets simulated latency per fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Total number of fetches across all sections.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond<T: Clone>(&self, result: &Result<T, ApiError>) -> Result<T, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        result.clone()
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_professors(&self) -> Result<Vec<Professor>, ApiError> {
        self.respond(&self.professors).await
    }

    async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.respond(&self.questions).await
    }

    async fn fetch_options(&self) -> Result<Vec<LikertOption>, ApiError> {
        self.respond(&self.options).await
    }
}
