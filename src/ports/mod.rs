//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the survey domain and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `CatalogSource` - Questions, Likert options and the professor roster
//! - `SurveyGateway` - Pending-survey lookup and evaluation submission
//! - `AuthGateway` - Student login
//!
//! ## Local Ports
//!
//! - `SessionStore` - Persisted token/user blob
//! - `ActivityLog` - Append-only capped activity log

mod activity_log;
mod api_error;
mod auth_gateway;
mod catalog_source;
mod session_store;
mod survey_gateway;

pub use activity_log::{
    ActivityEntry, ActivityKind, ActivityLog, ActivityLogError, DEFAULT_ACTIVITY_CAPACITY,
};
pub use api_error::ApiError;
pub use auth_gateway::AuthGateway;
pub use catalog_source::CatalogSource;
pub use session_store::{SessionStore, SessionStoreError};
pub use survey_gateway::SurveyGateway;
