//! Submission lifecycle: phase state machine, payloads, receipts and the
//! aggregated report of a fan-out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ProfessorMetrics;
use crate::domain::foundation::{LikertValue, ProfessorId, QuestionId, StateMachine, SurveyId};

/// Where the wizard is in the submit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionPhase {
    /// Survey is being filled in.
    #[default]
    Idle,
    /// Confirmation modal is shown.
    ModalOpen,
    /// Submissions are in flight.
    Submitting,
    /// At least one submission succeeded. Terminal.
    Done,
}

impl StateMachine for SubmissionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, target),
            (Idle, ModalOpen)
                | (ModalOpen, Idle)
                | (ModalOpen, Submitting)
                | (Submitting, Done)
                | (Submitting, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionPhase::*;
        match self {
            Idle => vec![ModalOpen],
            ModalOpen => vec![Idle, Submitting],
            Submitting => vec![Done, Idle],
            Done => vec![],
        }
    }
}

/// Server-side classification of a submitted comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Display label shown to students.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positivo",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negativo",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status of a server-side survey record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    Pending,
    Completed,
    #[serde(alias = "cancelled")]
    Canceled,
}

/// A survey record as listed for the student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySummary {
    pub id: SurveyId,
    pub status: SurveyStatus,
    pub professor_id: ProfessorId,
}

impl SurveySummary {
    pub fn is_pending_for(&self, professor: ProfessorId) -> bool {
        self.professor_id == professor && self.status == SurveyStatus::Pending
    }
}

/// Acknowledgement of one accepted evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub message: String,
    pub survey_id: SurveyId,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// Body posted for one professor: `{answers: {questionId: score}, comment}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub answers: BTreeMap<QuestionId, LikertValue>,
    pub comment: String,
}

/// One submission to dispatch, built at confirm time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRequest {
    pub professor_id: ProfessorId,
    pub professor_name: String,
    pub payload: SubmissionPayload,
    pub metrics: ProfessorMetrics,
}

/// Settled result of one professor's submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub professor_id: ProfessorId,
    pub professor_name: String,
    pub result: Result<SubmissionReceipt, String>,
}

impl SubmissionOutcome {
    pub fn succeeded(
        professor_id: ProfessorId,
        professor_name: impl Into<String>,
        receipt: SubmissionReceipt,
    ) -> Self {
        Self {
            professor_id,
            professor_name: professor_name.into(),
            result: Ok(receipt),
        }
    }

    pub fn failed(
        professor_id: ProfessorId,
        professor_name: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        Self {
            professor_id,
            professor_name: professor_name.into(),
            result: Err(cause.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Message shown when every submission failed or the confirm step aborted.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Error submitting the evaluation. Please try again.";

/// All outcomes of one fan-out, in no particular order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionReport {
    outcomes: Vec<SubmissionOutcome>,
}

impl SubmissionReport {
    pub fn new(outcomes: Vec<SubmissionOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[SubmissionOutcome] {
        &self.outcomes
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// True when nothing was committed and at least one submission failed.
    pub fn all_failed(&self) -> bool {
        self.success_count() == 0 && self.failure_count() > 0
    }

    pub fn failed_professors(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.professor_name.as_str())
            .collect()
    }

    /// The user-facing summary for this report.
    pub fn summary(&self) -> String {
        let success = self.success_count();
        let failure = self.failure_count();

        if failure == 0 {
            format!(
                "Thank you for your evaluation! You successfully evaluated {} professors.",
                success
            )
        } else if success > 0 {
            format!(
                "Evaluation partially successful: {} professors evaluated, {} failed ({}). Please contact support.",
                success,
                failure,
                self.failed_professors().join(", ")
            )
        } else {
            SUBMISSION_FAILED_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(id: i64) -> SubmissionReceipt {
        SubmissionReceipt {
            message: "Survey submitted successfully".to_string(),
            survey_id: SurveyId::new(id),
            sentiment: Sentiment::Positive,
            confidence: 0.91,
        }
    }

    fn ok(id: i64, name: &str) -> SubmissionOutcome {
        SubmissionOutcome::succeeded(ProfessorId::new(id), name, receipt(id * 10))
    }

    fn err(id: i64, name: &str) -> SubmissionOutcome {
        SubmissionOutcome::failed(ProfessorId::new(id), name, "Survey already completed")
    }

    // ───────────────────────────────────────────────────────────────
    // SubmissionPhase
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn idle_can_only_open_modal() {
        assert_eq!(
            SubmissionPhase::Idle.valid_transitions(),
            vec![SubmissionPhase::ModalOpen]
        );
        assert!(SubmissionPhase::Idle
            .transition_to(SubmissionPhase::Submitting)
            .is_err());
    }

    #[test]
    fn submitting_settles_to_done_or_idle() {
        let phase = SubmissionPhase::Submitting;
        assert!(phase.can_transition_to(&SubmissionPhase::Done));
        assert!(phase.can_transition_to(&SubmissionPhase::Idle));
        assert!(!phase.can_transition_to(&SubmissionPhase::ModalOpen));
    }

    #[test]
    fn done_is_terminal() {
        assert!(SubmissionPhase::Done.is_terminal());
        assert!(!SubmissionPhase::ModalOpen.is_terminal());
    }

    #[test]
    fn can_transition_agrees_with_valid_transitions() {
        use SubmissionPhase::*;
        for from in [Idle, ModalOpen, Submitting, Done] {
            for to in [Idle, ModalOpen, Submitting, Done] {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Wire types
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn survey_status_accepts_both_spellings_of_canceled() {
        let a: SurveyStatus = serde_json::from_str("\"canceled\"").unwrap();
        let b: SurveyStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(a, SurveyStatus::Canceled);
        assert_eq!(b, SurveyStatus::Canceled);
    }

    #[test]
    fn unknown_sentiment_is_rejected() {
        assert!(serde_json::from_str::<Sentiment>("\"mixed\"").is_err());
    }

    #[test]
    fn sentiment_labels_are_localized() {
        assert_eq!(Sentiment::Positive.to_string(), "Positivo");
        assert_eq!(Sentiment::Negative.label(), "Negativo");
    }

    #[test]
    fn payload_serializes_answers_keyed_by_question_id() {
        let mut answers = BTreeMap::new();
        answers.insert(QuestionId::new(2), LikertValue::try_from_u8(3).unwrap());
        answers.insert(QuestionId::new(1), LikertValue::try_from_u8(5).unwrap());
        let payload = SubmissionPayload {
            answers,
            comment: "Excelente profesor".to_string(),
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"answers":{"1":5,"2":3},"comment":"Excelente profesor"}"#
        );
    }

    #[test]
    fn pending_lookup_requires_matching_professor_and_status() {
        let summary = SurveySummary {
            id: SurveyId::new(7),
            status: SurveyStatus::Pending,
            professor_id: ProfessorId::new(2),
        };
        assert!(summary.is_pending_for(ProfessorId::new(2)));
        assert!(!summary.is_pending_for(ProfessorId::new(3)));

        let completed = SurveySummary {
            status: SurveyStatus::Completed,
            ..summary
        };
        assert!(!completed.is_pending_for(ProfessorId::new(2)));
    }

    // ───────────────────────────────────────────────────────────────
    // SubmissionReport
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn report_all_succeeded() {
        let report = SubmissionReport::new(vec![ok(1, "A"), ok(2, "B"), ok(3, "C")]);
        assert_eq!(report.success_count(), 3);
        assert_eq!(report.failure_count(), 0);
        assert!(!report.all_failed());
        assert_eq!(
            report.summary(),
            "Thank you for your evaluation! You successfully evaluated 3 professors."
        );
    }

    #[test]
    fn report_partial_names_failed_professors() {
        let report = SubmissionReport::new(vec![
            ok(1, "Dr. María González"),
            err(2, "Ing. Carlos Rodríguez"),
            ok(3, "Mtra. Ana López"),
        ]);
        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_failed());
        assert_eq!(
            report.summary(),
            "Evaluation partially successful: 2 professors evaluated, 1 failed (Ing. Carlos Rodríguez). Please contact support."
        );
    }

    #[test]
    fn report_all_failed() {
        let report = SubmissionReport::new(vec![err(1, "A"), err(2, "B")]);
        assert!(report.all_failed());
        assert_eq!(report.summary(), SUBMISSION_FAILED_MESSAGE);
    }

    #[test]
    fn empty_report_is_not_a_failure() {
        let report = SubmissionReport::default();
        assert!(!report.all_failed());
        assert_eq!(report.success_count(), 0);
    }
}
