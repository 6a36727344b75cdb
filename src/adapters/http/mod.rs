//! HTTP adapters for the evaluation backend.
//!
//! - `ApiClient` - reqwest wrapper holding the session context
//! - `HttpCatalogSource` - implements `CatalogSource`
//! - `HttpSurveyGateway` - implements `SurveyGateway`
//! - `HttpAuthGateway` - implements `AuthGateway`

mod auth;
mod catalog;
mod client;
mod dto;
mod survey;

pub use auth::HttpAuthGateway;
pub use catalog::HttpCatalogSource;
pub use client::ApiClient;
pub use survey::HttpSurveyGateway;
