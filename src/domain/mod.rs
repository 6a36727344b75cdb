//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, auth session)
//! - `catalog` - Questions, Likert options, professor roster and the bundled fallback
//! - `survey` - Wizard state, intent reducer, progress, metrics and submission report

pub mod catalog;
pub mod foundation;
pub mod survey;
