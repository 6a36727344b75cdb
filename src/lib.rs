//! UAEM Survey - Teacher evaluation survey client
//!
//! Students answer every question of the evaluation for each of their
//! professors, leave a comment per professor and submit all evaluations
//! at once. The survey wizard is a pure intent/effect state machine; the
//! application layer loads the catalog and fans submissions out to the
//! REST backend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
