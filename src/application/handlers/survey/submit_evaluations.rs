//! SubmitEvaluationsHandler - Concurrent per-professor submission.
//!
//! Each request runs its own sequential pair (list surveys, resolve the
//! pending survey for the professor, submit). All pairs are joined with
//! `join_all`, so one failure never cancels the others and the report
//! always holds one outcome per request.

use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::ProfessorId;
use crate::domain::survey::{
    SubmissionOutcome, SubmissionReceipt, SubmissionReport, SubmissionRequest,
};
use crate::ports::{ActivityEntry, ActivityKind, ActivityLog, ApiError, SurveyGateway};

/// Why one professor's submission failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),

    #[error("No pending survey found for professor {0}")]
    NoPendingSurvey(ProfessorId),
}

/// Command to submit the evaluations built at confirm time.
#[derive(Debug, Clone)]
pub struct SubmitEvaluationsCommand {
    /// Name recorded in the activity log.
    pub student_name: String,
    pub requests: Vec<SubmissionRequest>,
}

/// Handler for the submission fan-out.
pub struct SubmitEvaluationsHandler {
    gateway: Arc<dyn SurveyGateway>,
    activity: Arc<dyn ActivityLog>,
}

impl SubmitEvaluationsHandler {
    pub fn new(gateway: Arc<dyn SurveyGateway>, activity: Arc<dyn ActivityLog>) -> Self {
        Self { gateway, activity }
    }

    /// Submits every request concurrently and waits for all of them.
    pub async fn handle(&self, cmd: SubmitEvaluationsCommand) -> SubmissionReport {
        tracing::info!(professors = cmd.requests.len(), "submitting evaluations");

        let submissions = cmd
            .requests
            .iter()
            .map(|request| self.submit_one(&cmd.student_name, request));
        let report = SubmissionReport::new(join_all(submissions).await);

        tracing::info!(
            succeeded = report.success_count(),
            failed = report.failure_count(),
            "survey submission complete"
        );
        report
    }

    async fn submit_one(&self, student_name: &str, request: &SubmissionRequest) -> SubmissionOutcome {
        match self.resolve_and_submit(request).await {
            Ok(receipt) => {
                tracing::info!(
                    professor_id = %request.professor_id,
                    survey_id = %receipt.survey_id,
                    sentiment = %receipt.sentiment,
                    confidence = receipt.confidence,
                    "evaluation submitted"
                );
                self.record_completion(student_name, request, &receipt).await;
                SubmissionOutcome::succeeded(
                    request.professor_id,
                    request.professor_name.clone(),
                    receipt,
                )
            }
            Err(e) => {
                tracing::warn!(
                    professor_id = %request.professor_id,
                    professor = %request.professor_name,
                    error = %e,
                    "evaluation submission failed"
                );
                SubmissionOutcome::failed(
                    request.professor_id,
                    request.professor_name.clone(),
                    e.to_string(),
                )
            }
        }
    }

    async fn resolve_and_submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let surveys = self.gateway.list_surveys().await?;
        let survey = surveys
            .iter()
            .find(|s| s.is_pending_for(request.professor_id))
            .ok_or(SubmissionError::NoPendingSurvey(request.professor_id))?;

        tracing::debug!(
            professor_id = %request.professor_id,
            survey_id = %survey.id,
            average_score = %request.metrics.average_score,
            "submitting evaluation"
        );

        Ok(self.gateway.submit(survey.id, &request.payload).await?)
    }

    async fn record_completion(
        &self,
        student_name: &str,
        request: &SubmissionRequest,
        receipt: &SubmissionReceipt,
    ) {
        let entry = ActivityEntry::new(
            ActivityKind::SurveyCompleted,
            student_name,
            format!("Completed evaluation for {}", request.professor_name),
        )
        .with_metadata("professor_id", request.professor_id)
        .with_metadata("survey_id", receipt.survey_id)
        .with_metadata("sentiment", receipt.sentiment.label());

        if let Err(e) = self.activity.record(entry).await {
            tracing::warn!(error = %e, "failed to record survey completion");
        }
    }
}
