//! Survey module - the wizard state machine for a multi-professor evaluation.
//!
//! - `state`: answer matrix, comments, validation errors
//! - `progress`: derived completion state
//! - `metrics`: per-professor scores computed at confirm time
//! - `submission`: submit phase, payloads, receipts and the fan-out report
//! - `wizard`: the intent/effect reducer tying it together

mod metrics;
mod progress;
mod state;
mod submission;
mod wizard;

pub use metrics::{ProfessorEvaluation, ProfessorMetrics, ScoredResponse};
pub use progress::SurveyProgress;
pub use state::{
    check_comment, AnswerMatrix, CommentMap, ErrorKey, FieldError, ValidationErrors, WizardState,
    MIN_COMMENT_CHARS,
};
pub use submission::{
    Sentiment, SubmissionOutcome, SubmissionPayload, SubmissionPhase, SubmissionReceipt,
    SubmissionReport, SubmissionRequest, SurveyStatus, SurveySummary, SUBMISSION_FAILED_MESSAGE,
};
pub use wizard::{Effect, Intent, SurveyWizard};
