//! HttpSurveyGateway - pending-survey lookup and submission over HTTP.

use async_trait::async_trait;
use std::sync::Arc;

use super::dto::SurveysResponse;
use super::ApiClient;
use crate::domain::foundation::SurveyId;
use crate::domain::survey::{SubmissionPayload, SubmissionReceipt, SurveySummary};
use crate::ports::{ApiError, SurveyGateway};

#[derive(Debug, Clone)]
pub struct HttpSurveyGateway {
    client: Arc<ApiClient>,
}

impl HttpSurveyGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SurveyGateway for HttpSurveyGateway {
    async fn list_surveys(&self) -> Result<Vec<SurveySummary>, ApiError> {
        let response: SurveysResponse = self.client.get_json("/student/surveys").await?;
        Ok(response.into_domain())
    }

    async fn submit(
        &self,
        survey_id: SurveyId,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, ApiError> {
        let path = format!("/student/surveys/{}/submit", survey_id);
        self.client.post_json(&path, payload).await
    }
}
