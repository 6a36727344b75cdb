//! Mock adapters for testing and offline runs.
//!
//! - `MockCatalogSource` - scripted catalog sections, fallback data by default
//! - `MockSurveyGateway` - scripted survey list and submission results

mod catalog_source;
mod survey_gateway;

pub use catalog_source::MockCatalogSource;
pub use survey_gateway::MockSurveyGateway;
