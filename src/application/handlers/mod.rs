//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod auth;
pub mod survey;

pub use auth::{LoginCommand, LoginError, LoginHandler, LogoutHandler};
pub use survey::{
    LoadSurveyCommand, LoadSurveyError, LoadSurveyHandler, LoadedSurvey, SubmissionError,
    SubmitEvaluationsCommand, SubmitEvaluationsHandler, SurveySession,
};
