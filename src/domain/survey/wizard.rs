//! SurveyWizard - the intent/effect reducer driving one survey session.
//!
//! `apply` is the single transition function: it consumes one [`Intent`],
//! mutates the owned [`WizardState`] and returns the side effects the host
//! must perform. Nothing here touches the network or the clock.

use std::collections::BTreeMap;

use super::{
    check_comment, ErrorKey, FieldError, ProfessorEvaluation, SubmissionPayload, SubmissionPhase,
    SubmissionReport, SubmissionRequest, SurveyProgress, ValidationErrors, WizardState,
    SUBMISSION_FAILED_MESSAGE,
};
use crate::domain::catalog::{Question, SurveyCatalog};
use crate::domain::foundation::{LikertValue, ProfessorId, QuestionId, StateMachine};

/// A state-transition message sent by the presentation layer or by the
/// submission driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    AnswerRecorded {
        question: QuestionId,
        professor: ProfessorId,
        value: LikertValue,
    },
    CommentChanged {
        professor: ProfessorId,
        text: String,
    },
    NextRequested,
    PreviousRequested,
    SubmitRequested,
    ConfirmRequested,
    CancelRequested,
    /// Every dispatched submission has settled.
    SubmissionSettled(SubmissionReport),
    /// The dispatch itself failed before producing outcomes.
    SubmissionAborted(String),
}

/// A side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollToTop,
    /// Send these submissions concurrently and report back with
    /// [`Intent::SubmissionSettled`].
    Dispatch(Vec<SubmissionRequest>),
    Alert(String),
    Redirect,
}

/// Owns the catalog and the state of one survey session.
#[derive(Debug, Clone)]
pub struct SurveyWizard {
    catalog: SurveyCatalog,
    state: WizardState,
}

impl SurveyWizard {
    /// Starts a session with empty answers and comments on the first question.
    pub fn new(catalog: SurveyCatalog) -> Self {
        Self {
            catalog,
            state: WizardState::new(),
        }
    }

    pub fn catalog(&self) -> &SurveyCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.state.phase
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.catalog.questions.get(self.state.current_question_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_question_index + 1 >= self.catalog.question_count()
    }

    pub fn progress(&self) -> f64 {
        SurveyProgress::new(&self.catalog, &self.state).percent_complete()
    }

    pub fn all_questions_answered(&self) -> bool {
        SurveyProgress::new(&self.catalog, &self.state).all_questions_answered()
    }

    pub fn all_comments_valid(&self) -> bool {
        SurveyProgress::new(&self.catalog, &self.state).all_comments_valid()
    }

    /// Applies one intent. Intents that are not legal in the current phase
    /// are ignored and produce no effects.
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::AnswerRecorded {
                question,
                professor,
                value,
            } => self.record_answer(question, professor, value),
            Intent::CommentChanged { professor, text } => self.record_comment(professor, text),
            Intent::NextRequested => self.go_next(),
            Intent::PreviousRequested => self.go_previous(),
            Intent::SubmitRequested => self.submit(),
            Intent::ConfirmRequested => self.confirm(),
            Intent::CancelRequested => self.cancel(),
            Intent::SubmissionSettled(report) => self.settle(&report),
            Intent::SubmissionAborted(_) => self.abort_submission(),
        }
    }

    fn editable(&self) -> bool {
        self.state.phase == SubmissionPhase::Idle
    }

    fn move_to(&mut self, target: SubmissionPhase) -> bool {
        match self.state.phase.transition_to(target) {
            Ok(phase) => {
                self.state.phase = phase;
                true
            }
            Err(_) => false,
        }
    }

    fn record_answer(
        &mut self,
        question: QuestionId,
        professor: ProfessorId,
        value: LikertValue,
    ) -> Vec<Effect> {
        if !self.editable()
            || self.catalog.question_index(question).is_none()
            || self.catalog.professor(professor).is_none()
        {
            return vec![];
        }
        self.state.answers.record(question, professor, value);
        self.state
            .errors
            .clear(&ErrorKey::Answer { question, professor });
        vec![]
    }

    fn record_comment(&mut self, professor: ProfessorId, text: String) -> Vec<Effect> {
        if !self.editable() || self.catalog.professor(professor).is_none() {
            return vec![];
        }
        self.state.comments.set(professor, text);
        self.state.errors.clear(&ErrorKey::Comment(professor));
        vec![]
    }

    fn go_next(&mut self) -> Vec<Effect> {
        if !self.editable() {
            return vec![];
        }
        let Some(question) = self.current_question().map(|q| q.id) else {
            return vec![];
        };

        let mut errors = ValidationErrors::new();
        for professor in &self.catalog.professors {
            if !self.state.answers.is_answered(question, professor.id) {
                errors.insert(
                    ErrorKey::Answer {
                        question,
                        professor: professor.id,
                    },
                    FieldError::SelectOption,
                );
            }
        }
        if !errors.is_empty() {
            self.state.errors = errors;
            return vec![];
        }
        // Errors on other questions and comments survive a successful step.
        for professor in &self.catalog.professors {
            self.state.errors.clear(&ErrorKey::Answer {
                question,
                professor: professor.id,
            });
        }

        if self.is_last_question() {
            return vec![];
        }
        self.state.current_question_index += 1;
        vec![Effect::ScrollToTop]
    }

    fn go_previous(&mut self) -> Vec<Effect> {
        if !self.editable() || self.state.current_question_index == 0 {
            return vec![];
        }
        self.state.current_question_index -= 1;
        vec![Effect::ScrollToTop]
    }

    /// Full validation pass. Replaces the error set and returns true iff it
    /// ends up empty.
    fn validate_all(&mut self) -> bool {
        let mut errors = ValidationErrors::new();
        for question in &self.catalog.questions {
            for professor in &self.catalog.professors {
                if !self.state.answers.is_answered(question.id, professor.id) {
                    errors.insert(
                        ErrorKey::Answer {
                            question: question.id,
                            professor: professor.id,
                        },
                        FieldError::Unanswered,
                    );
                }
            }
        }
        for professor in &self.catalog.professors {
            if let Err(error) = check_comment(self.state.comments.get(professor.id)) {
                errors.insert(ErrorKey::Comment(professor.id), error);
            }
        }
        let valid = errors.is_empty();
        self.state.errors = errors;
        valid
    }

    fn submit(&mut self) -> Vec<Effect> {
        if !self.editable() {
            return vec![];
        }
        if self.validate_all() {
            self.move_to(SubmissionPhase::ModalOpen);
            return vec![];
        }

        let progress = SurveyProgress::new(&self.catalog, &self.state);
        if let Some(index) = progress.first_incomplete_question() {
            self.state.current_question_index = index;
        }
        vec![Effect::ScrollToTop]
    }

    fn cancel(&mut self) -> Vec<Effect> {
        if self.state.phase == SubmissionPhase::ModalOpen {
            self.move_to(SubmissionPhase::Idle);
        }
        vec![]
    }

    fn confirm(&mut self) -> Vec<Effect> {
        if self.state.phase != SubmissionPhase::ModalOpen {
            return vec![];
        }

        // Metrics divide by the question count; refuse to compute them for
        // an incomplete or empty survey.
        let ready = self.catalog.question_count() > 0
            && SurveyProgress::new(&self.catalog, &self.state).is_complete();
        if !ready {
            self.move_to(SubmissionPhase::Idle);
            return vec![Effect::Alert(SUBMISSION_FAILED_MESSAGE.to_string())];
        }

        if !self.move_to(SubmissionPhase::Submitting) {
            return vec![];
        }
        vec![Effect::Dispatch(self.build_requests())]
    }

    fn build_requests(&self) -> Vec<SubmissionRequest> {
        self.catalog
            .professors
            .iter()
            .map(|professor| {
                let evaluation = ProfessorEvaluation::compute(&self.catalog, &self.state, professor);
                let answers: BTreeMap<QuestionId, LikertValue> = evaluation
                    .responses
                    .iter()
                    .map(|r| (r.question_id, r.score))
                    .collect();
                SubmissionRequest {
                    professor_id: evaluation.professor_id,
                    professor_name: evaluation.professor_name,
                    payload: SubmissionPayload {
                        answers,
                        comment: evaluation.comment,
                    },
                    metrics: evaluation.metrics,
                }
            })
            .collect()
    }

    fn settle(&mut self, report: &SubmissionReport) -> Vec<Effect> {
        if self.state.phase != SubmissionPhase::Submitting {
            return vec![];
        }
        if report.all_failed() {
            self.move_to(SubmissionPhase::Idle);
            return vec![Effect::Alert(SUBMISSION_FAILED_MESSAGE.to_string())];
        }
        self.move_to(SubmissionPhase::Done);
        vec![Effect::Alert(report.summary()), Effect::Redirect]
    }

    fn abort_submission(&mut self) -> Vec<Effect> {
        if self.state.phase != SubmissionPhase::Submitting {
            return vec![];
        }
        self.move_to(SubmissionPhase::Idle);
        vec![Effect::Alert(SUBMISSION_FAILED_MESSAGE.to_string())]
    }
}
