//! Mock SurveyGateway for testing and offline runs.
//!
//! # Features
//!
//! - Scripted survey list (or list error)
//! - Per-survey submission failures
//! - Simulated latency and in-flight tracking for concurrency tests
//! - Call tracking for verification

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::{ProfessorId, SurveyId};
use crate::domain::survey::{
    Sentiment, SubmissionPayload, SubmissionReceipt, SurveyStatus, SurveySummary,
};
use crate::ports::{ApiError, SurveyGateway};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone)]
pub struct MockSurveyGateway {
    surveys: Result<Vec<SurveySummary>, ApiError>,
    failures: HashMap<SurveyId, ApiError>,
    sentiment: Sentiment,
    delay: Duration,
    list_calls: Arc<AtomicUsize>,
    submissions: Arc<Mutex<Vec<(SurveyId, SubmissionPayload)>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl Default for MockSurveyGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSurveyGateway {
    pub fn new() -> Self {
        Self {
            surveys: Ok(Vec::new()),
            failures: HashMap::new(),
            sentiment: Sentiment::Positive,
            delay: Duration::ZERO,
            list_calls: Arc::new(AtomicUsize::new(0)),
            submissions: Arc::new(Mutex::new(Vec::new())),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Survey id used for a professor's pending survey by [`Self::with_pending_for`].
    pub fn pending_survey_id(professor: ProfessorId) -> SurveyId {
        SurveyId::new(100 + professor.value())
    }

    /// Lists one pending survey per professor.
    pub fn with_pending_for(mut self, professors: &[ProfessorId]) -> Self {
        self.surveys = Ok(professors
            .iter()
            .map(|p| SurveySummary {
                id: Self::pending_survey_id(*p),
                status: SurveyStatus::Pending,
                professor_id: *p,
            })
            .collect());
        self
    }

    pub fn with_surveys(mut self, surveys: Vec<SurveySummary>) -> Self {
        self.surveys = Ok(surveys);
        self
    }

    pub fn with_list_error(mut self, error: ApiError) -> Self {
        self.surveys = Err(error);
        self
    }

    /// Makes submissions to `survey_id` fail with `error`.
    pub fn with_submit_error(mut self, survey_id: SurveyId, error: ApiError) -> Self {
        self.failures.insert(survey_id, error);
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Returns all recorded submissions, in arrival order.
    pub fn submissions(&self) -> Vec<(SurveyId, SubmissionPayload)> {
        lock(&self.submissions).clone()
    }

    /// Highest number of submissions observed in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SurveyGateway for MockSurveyGateway {
    async fn list_surveys(&self) -> Result<Vec<SurveySummary>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.surveys.clone()
    }

    async fn submit(
        &self,
        survey_id: SurveyId,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, ApiError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        lock(&self.submissions).push((survey_id, payload.clone()));

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.failures.get(&survey_id) {
            Some(error) => Err(error.clone()),
            None => Ok(SubmissionReceipt {
                message: "Survey submitted successfully".to_string(),
                survey_id,
                sentiment: self.sentiment,
                confidence: 0.87,
            }),
        }
    }
}
