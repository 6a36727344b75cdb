//! Catalog module - questions, Likert options and the professor roster.

mod fallback;
mod model;

pub use fallback::{fallback_options, fallback_professors, fallback_questions};
pub use model::{
    professor_accent, CatalogOrigin, CatalogOrigins, LikertOption, Professor, Question, Subject,
    SurveyCatalog, MULTIPLE_SUBJECTS,
};
