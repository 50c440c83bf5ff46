//! Core foundation for the Mirage insight-verification engine.
//!
//! Configuration, error enums, shared collection types, and tracing setup.
//! No analysis logic lives here — see `mirage-analysis`.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
