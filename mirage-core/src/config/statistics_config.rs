//! Statistical analysis configuration.

use serde::{Deserialize, Serialize};

/// Effect-size cut points, descending: large > medium > small.
///
/// Values below `small` classify as negligible and are discarded by the
/// ground-truth engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EffectSizeThresholds {
    /// Cut point for a strong effect. Default: 0.8.
    pub large: Option<f64>,
    /// Cut point for a moderate effect. Default: 0.5.
    pub medium: Option<f64>,
    /// Cut point for a weak effect. Default: 0.2.
    pub small: Option<f64>,
}

impl EffectSizeThresholds {
    pub fn effective_large(&self) -> f64 {
        self.large.unwrap_or(0.8)
    }

    pub fn effective_medium(&self) -> f64 {
        self.medium.unwrap_or(0.5)
    }

    pub fn effective_small(&self) -> f64 {
        self.small.unwrap_or(0.2)
    }
}

/// Configuration for the ground-truth statistical engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Two-sided significance level for all hypothesis tests. Default: 0.05.
    pub significance_level: Option<f64>,
    /// Effect-size banding for correlations and associations.
    pub effect_size_thresholds: EffectSizeThresholds,
}

impl StatisticsConfig {
    /// Returns the effective significance level, defaulting to 0.05.
    pub fn effective_significance_level(&self) -> f64 {
        self.significance_level.unwrap_or(0.05)
    }
}
