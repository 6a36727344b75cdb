//! Survey handlers: catalog loading, submission fan-out and the session driver.

mod load_survey;
mod submit_evaluations;
mod survey_session;

pub use load_survey::{LoadSurveyCommand, LoadSurveyError, LoadSurveyHandler, LoadedSurvey};
pub use submit_evaluations::{
    SubmissionError, SubmitEvaluationsCommand, SubmitEvaluationsHandler,
};
pub use survey_session::SurveySession;
