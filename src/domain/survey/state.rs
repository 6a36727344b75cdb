//! Wizard state: answer matrix, comments, validation errors and phase.

use std::collections::BTreeMap;
use std::fmt;

use super::SubmissionPhase;
use crate::domain::foundation::{LikertValue, ProfessorId, QuestionId};

/// Minimum trimmed length of a per-professor comment.
pub const MIN_COMMENT_CHARS: usize = 10;

/// Sparse matrix of recorded answers: question -> professor -> value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMatrix {
    entries: BTreeMap<QuestionId, BTreeMap<ProfessorId, LikertValue>>,
}

impl AnswerMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded value for a (question, professor) pair.
    pub fn get(&self, question: QuestionId, professor: ProfessorId) -> Option<LikertValue> {
        self.entries
            .get(&question)
            .and_then(|row| row.get(&professor))
            .copied()
    }

    /// Inserts or overwrites a matrix entry.
    pub fn record(&mut self, question: QuestionId, professor: ProfessorId, value: LikertValue) {
        self.entries
            .entry(question)
            .or_default()
            .insert(professor, value);
    }

    pub fn is_answered(&self, question: QuestionId, professor: ProfessorId) -> bool {
        self.get(question, professor).is_some()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Free-text comment per professor, stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentMap {
    entries: BTreeMap<ProfessorId, String>,
}

impl CommentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, professor: ProfessorId) -> Option<&str> {
        self.entries.get(&professor).map(String::as_str)
    }

    pub fn set(&mut self, professor: ProfessorId, text: impl Into<String>) {
        self.entries.insert(professor, text.into());
    }

    /// True if the professor's trimmed comment meets the minimum length.
    pub fn is_valid(&self, professor: ProfessorId) -> bool {
        check_comment(self.get(professor)).is_ok()
    }
}

/// Checks a comment the way the submit-time validation does.
pub fn check_comment(text: Option<&str>) -> Result<(), FieldError> {
    let trimmed = text.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        Err(FieldError::CommentRequired)
    } else if trimmed.chars().count() < MIN_COMMENT_CHARS {
        Err(FieldError::CommentTooShort)
    } else {
        Ok(())
    }
}

/// Key of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Answer {
        question: QuestionId,
        professor: ProfessorId,
    },
    Comment(ProfessorId),
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKey::Answer {
                question,
                professor,
            } => write!(f, "question:{}:professor:{}", question, professor),
            ErrorKey::Comment(professor) => write!(f, "comment:{}", professor),
        }
    }
}

/// A human-readable validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// Set by the forward-navigation check.
    SelectOption,
    /// Set by the full validation pass.
    Unanswered,
    CommentRequired,
    CommentTooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldError::SelectOption => "select an option",
            FieldError::Unanswered => "unanswered",
            FieldError::CommentRequired => "required",
            FieldError::CommentTooShort => "minimum 10 characters",
        };
        write!(f, "{}", msg)
    }
}

/// Transient validation errors keyed by input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<ErrorKey, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ErrorKey, error: FieldError) {
        self.entries.insert(key, error);
    }

    pub fn clear(&mut self, key: &ErrorKey) {
        self.entries.remove(key);
    }

    pub fn get(&self, key: &ErrorKey) -> Option<FieldError> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &ErrorKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ErrorKey, &FieldError)> {
        self.entries.iter()
    }
}

/// In-memory state of one survey session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub current_question_index: usize,
    pub answers: AnswerMatrix,
    pub comments: CommentMap,
    pub errors: ValidationErrors,
    pub phase: SubmissionPhase,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The confirmation modal is visible while confirming or submitting.
    pub fn submit_modal_open(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::ModalOpen | SubmissionPhase::Submitting
        )
    }

    /// Confirm is disabled from dispatch until the session ends or fails.
    pub fn is_submitting(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::Submitting | SubmissionPhase::Done
        )
    }
}
