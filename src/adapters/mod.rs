//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - reqwest client for the evaluation backend
//! - `storage` - session and activity log persistence (file, in-memory)
//! - `mock` - scripted catalog and survey gateways
//! - `render` - text presentation of the wizard
//! - `terminal` - line commands mapped to wizard intents

pub mod http;
pub mod mock;
pub mod render;
pub mod storage;
pub mod terminal;

pub use http::{ApiClient, HttpAuthGateway, HttpCatalogSource, HttpSurveyGateway};
pub use mock::{MockCatalogSource, MockSurveyGateway};
pub use storage::{FileActivityLog, FileSessionStore, InMemoryActivityLog, InMemorySessionStore};
