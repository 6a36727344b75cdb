//! SurveySession - Async driver around the survey wizard.
//!
//! Forwards intents to [`SurveyWizard::apply`], runs `Effect::Dispatch`
//! through [`SubmitEvaluationsHandler`] on a spawned task, feeds the settled
//! report back into the wizard and hands the remaining effects to the host.

use std::collections::VecDeque;
use std::sync::Arc;

use super::{LoadedSurvey, SubmitEvaluationsCommand, SubmitEvaluationsHandler};
use crate::domain::catalog::CatalogOrigins;
use crate::domain::foundation::SessionUser;
use crate::domain::survey::{Effect, Intent, SubmissionRequest, SurveyWizard};

/// One student's survey session.
pub struct SurveySession {
    wizard: SurveyWizard,
    student: SessionUser,
    origins: CatalogOrigins,
    submitter: Arc<SubmitEvaluationsHandler>,
}

impl SurveySession {
    pub fn new(loaded: LoadedSurvey, submitter: Arc<SubmitEvaluationsHandler>) -> Self {
        Self {
            wizard: SurveyWizard::new(loaded.catalog),
            student: loaded.student,
            origins: loaded.origins,
            submitter,
        }
    }

    pub fn wizard(&self) -> &SurveyWizard {
        &self.wizard
    }

    pub fn student(&self) -> &SessionUser {
        &self.student
    }

    pub fn origins(&self) -> CatalogOrigins {
        self.origins
    }

    /// Applies an intent and executes any dispatch it produces. Returns the
    /// effects the host must perform (scrolling, alerts, redirect).
    pub async fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        let mut pending: VecDeque<Effect> = self.wizard.apply(intent).into();
        let mut host_effects = Vec::new();

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::Dispatch(requests) => {
                    let completion = self.submit(requests).await;
                    pending.extend(self.wizard.apply(completion));
                }
                other => host_effects.push(other),
            }
        }

        host_effects
    }

    async fn submit(&self, requests: Vec<SubmissionRequest>) -> Intent {
        let submitter = Arc::clone(&self.submitter);
        let cmd = SubmitEvaluationsCommand {
            student_name: self.student.full_name(),
            requests,
        };

        match tokio::spawn(async move { submitter.handle(cmd).await }).await {
            Ok(report) => Intent::SubmissionSettled(report),
            Err(e) => {
                tracing::error!(error = %e, "submission task failed");
                Intent::SubmissionAborted(e.to_string())
            }
        }
    }
}
