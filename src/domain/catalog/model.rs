//! Catalog value objects: questions, Likert options and the professor roster.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LikertValue, ProfessorId, QuestionId, SubjectId};

/// Label used for a professor whose subject list is empty.
pub const MULTIPLE_SUBJECTS: &str = "Multiple subjects";

/// An evaluation question. Catalog order is the wizard step order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub topic: String,
    pub category: String,
}

impl Question {
    pub fn new(
        id: i64,
        topic: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            topic: topic.into(),
            category: category.into(),
        }
    }
}

/// A Likert option shared by every question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertOption {
    pub value: LikertValue,
    pub label: String,
    pub color: String,
}

/// A subject taught by a professor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// A professor the student has to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: ProfessorId,
    pub name: String,
    /// Display subject: the first subject's name, or [`MULTIPLE_SUBJECTS`].
    pub subject: String,
    pub subjects: Vec<Subject>,
}

impl Professor {
    /// Builds a roster entry, deriving the display subject from the list.
    pub fn with_subjects(id: ProfessorId, name: impl Into<String>, subjects: Vec<Subject>) -> Self {
        let subject = subjects
            .first()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| MULTIPLE_SUBJECTS.to_string());
        Self {
            id,
            name: name.into(),
            subject,
            subjects,
        }
    }
}

/// Where a catalog section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogOrigin {
    #[default]
    Remote,
    Fallback,
}

/// Origin of each of the three catalog sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogOrigins {
    pub professors: CatalogOrigin,
    pub questions: CatalogOrigin,
    pub options: CatalogOrigin,
}

impl CatalogOrigins {
    /// Returns true if any section was replaced by its fallback.
    pub fn any_fallback(&self) -> bool {
        [self.professors, self.questions, self.options].contains(&CatalogOrigin::Fallback)
    }
}

/// Everything the wizard needs for one session. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyCatalog {
    pub questions: Vec<Question>,
    pub options: Vec<LikertOption>,
    pub professors: Vec<Professor>,
}

impl SurveyCatalog {
    pub fn new(
        questions: Vec<Question>,
        options: Vec<LikertOption>,
        professors: Vec<Professor>,
    ) -> Self {
        Self {
            questions,
            options,
            professors,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn professor_count(&self) -> usize {
        self.professors.len()
    }

    pub fn professor(&self, id: ProfessorId) -> Option<&Professor> {
        self.professors.iter().find(|p| p.id == id)
    }

    pub fn question_index(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn option(&self, value: LikertValue) -> Option<&LikertOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Accent colour for a professor column, cycling through three tags.
pub fn professor_accent(index: usize) -> &'static str {
    const ACCENTS: [&str; 3] = [
        "from-purple-500 to-purple-600",
        "from-blue-500 to-blue-600",
        "from-green-500 to-green-600",
    ];
    ACCENTS[index % ACCENTS.len()]
}
