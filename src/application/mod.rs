//! Application layer - Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The wizard itself stays pure; handlers own every network and storage call.

pub mod handlers;

pub use handlers::{
    // Auth handlers
    LoginCommand, LoginError, LoginHandler, LogoutHandler,
    // Survey handlers
    LoadSurveyCommand, LoadSurveyError, LoadSurveyHandler, LoadedSurvey,
    SubmissionError, SubmitEvaluationsCommand, SubmitEvaluationsHandler,
    SurveySession,
};
