//! Configuration system for Mirage.
//! TOML-based, project config over compiled defaults.

pub mod mirage_config;
pub mod statistics_config;
pub mod validation_config;

pub use mirage_config::MirageConfig;
pub use statistics_config::{EffectSizeThresholds, StatisticsConfig};
pub use validation_config::ValidationConfig;
