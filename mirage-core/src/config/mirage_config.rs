//! Top-level Mirage configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{StatisticsConfig, ValidationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Project config (`mirage.toml` in the project root)
/// 2. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MirageConfig {
    pub statistics: StatisticsConfig,
    pub validation: ValidationConfig,
}

impl MirageConfig {
    /// Load configuration from `mirage.toml` under `root`.
    ///
    /// A missing file falls back to compiled defaults; a present but
    /// malformed file is a `ConfigError`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join("mirage.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&raw).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: String::new(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate threshold ranges and ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alpha = self.statistics.effective_significance_level();
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "statistics.significance_level".to_string(),
                message: format!("must be in (0, 1), got {alpha}"),
            });
        }

        let t = &self.statistics.effect_size_thresholds;
        let (large, medium, small) =
            (t.effective_large(), t.effective_medium(), t.effective_small());
        if !(large > medium && medium > small && small > 0.0 && large < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "statistics.effect_size_thresholds".to_string(),
                message: format!(
                    "must satisfy 0 < small < medium < large < 1, got {small}/{medium}/{large}"
                ),
            });
        }

        let match_threshold = self.validation.effective_match_threshold();
        if !(match_threshold > 0.0 && match_threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "validation.match_threshold".to_string(),
                message: format!("must be in (0, 1], got {match_threshold}"),
            });
        }

        Ok(())
    }
}
