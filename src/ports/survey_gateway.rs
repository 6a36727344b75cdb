//! SurveyGateway port - pending-survey lookup and evaluation submission.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::foundation::SurveyId;
use crate::domain::survey::{SubmissionPayload, SubmissionReceipt, SurveySummary};

#[async_trait]
pub trait SurveyGateway: Send + Sync {
    /// All surveys (pending, completed, canceled) of the current student.
    async fn list_surveys(&self) -> Result<Vec<SurveySummary>, ApiError>;

    /// Posts one completed evaluation.
    async fn submit(
        &self,
        survey_id: SurveyId,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, ApiError>;
}
