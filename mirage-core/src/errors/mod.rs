//! Error handling for Mirage.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod stat_error;

pub use config_error::ConfigError;
pub use stat_error::StatError;
