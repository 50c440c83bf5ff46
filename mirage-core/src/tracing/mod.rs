//! Tracing and observability for Mirage.

pub mod setup;

pub use setup::init_tracing;
