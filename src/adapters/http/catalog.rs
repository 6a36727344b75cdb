//! HttpCatalogSource - catalog sections from the REST backend.

use async_trait::async_trait;
use std::sync::Arc;

use super::dto::{OptionsResponse, ProfessorsResponse, QuestionsResponse};
use super::ApiClient;
use crate::domain::catalog::{LikertOption, Professor, Question};
use crate::ports::{ApiError, CatalogSource};

/// Reads professors, questions and options over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Arc<ApiClient>,
}

impl HttpCatalogSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_professors(&self) -> Result<Vec<Professor>, ApiError> {
        let response: ProfessorsResponse = self.client.get_json("/student/professors").await?;
        Ok(response.into_domain())
    }

    async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError> {
        let response: QuestionsResponse = self.client.get_json("/survey/questions").await?;
        response.into_domain()
    }

    async fn fetch_options(&self) -> Result<Vec<LikertOption>, ApiError> {
        let response: OptionsResponse = self.client.get_json("/survey/options").await?;
        response.into_domain()
    }
}
