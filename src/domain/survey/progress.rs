//! SurveyProgress - derived completion state of a survey session.
//!
//! Pure derivations over the catalog and the wizard state; nothing here is
//! stored, everything is recomputed on demand.

use crate::domain::catalog::SurveyCatalog;

use super::WizardState;

/// A read-only view over a catalog and the answers/comments recorded so far.
#[derive(Debug, Clone, Copy)]
pub struct SurveyProgress<'a> {
    catalog: &'a SurveyCatalog,
    state: &'a WizardState,
}

impl<'a> SurveyProgress<'a> {
    pub fn new(catalog: &'a SurveyCatalog, state: &'a WizardState) -> Self {
        Self { catalog, state }
    }

    /// Completable items: one per (question, professor) pair plus one
    /// comment per professor.
    pub fn total_items(&self) -> usize {
        let professors = self.catalog.professor_count();
        self.catalog.question_count() * professors + professors
    }

    /// Number of (question, professor) pairs with a recorded answer.
    pub fn answered_count(&self) -> usize {
        self.catalog
            .questions
            .iter()
            .map(|q| {
                self.catalog
                    .professors
                    .iter()
                    .filter(|p| self.state.answers.is_answered(q.id, p.id))
                    .count()
            })
            .sum()
    }

    /// Number of professors whose comment passes the length check.
    pub fn valid_comment_count(&self) -> usize {
        self.catalog
            .professors
            .iter()
            .filter(|p| self.state.comments.is_valid(p.id))
            .count()
    }

    /// Completion percentage in `[0, 100]`.
    ///
    /// An empty roster has nothing left to complete and reports 100.
    pub fn percent_complete(&self) -> f64 {
        let total = self.total_items();
        if total == 0 {
            return 100.0;
        }
        let completed = self.answered_count() + self.valid_comment_count();
        completed as f64 / total as f64 * 100.0
    }

    /// True iff every question has an answer for every professor.
    pub fn all_questions_answered(&self) -> bool {
        self.catalog.questions.iter().all(|q| {
            self.catalog
                .professors
                .iter()
                .all(|p| self.state.answers.is_answered(q.id, p.id))
        })
    }

    /// True iff every professor's comment passes the length check.
    pub fn all_comments_valid(&self) -> bool {
        self.catalog
            .professors
            .iter()
            .all(|p| self.state.comments.is_valid(p.id))
    }

    /// True when the survey can be submitted.
    pub fn is_complete(&self) -> bool {
        self.all_questions_answered() && self.all_comments_valid()
    }

    /// Index of the first question missing an answer for some professor.
    pub fn first_incomplete_question(&self) -> Option<usize> {
        self.catalog.questions.iter().position(|q| {
            self.catalog
                .professors
                .iter()
                .any(|p| !self.state.answers.is_answered(q.id, p.id))
        })
    }
}
