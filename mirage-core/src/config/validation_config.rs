//! Claim validation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for claim-to-ground-truth validation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Fuzzy-match threshold as a fraction of the 0–100 similarity scale.
    /// A column name matches a claim when its partial ratio against the
    /// claim text reaches `match_threshold * 100`. Default: 0.8.
    pub match_threshold: Option<f64>,
    /// Absolute tolerance when matching a claimed sample size against the
    /// recorded row count. Default: 5.0.
    pub sample_size_tolerance: Option<f64>,
    /// Relative tolerance when matching claimed descriptive statistics
    /// (mean, min/max, std, median). Default: 0.1.
    pub relative_tolerance: Option<f64>,
}

impl ValidationConfig {
    /// Returns the effective fuzzy-match threshold fraction, defaulting to 0.8.
    pub fn effective_match_threshold(&self) -> f64 {
        self.match_threshold.unwrap_or(0.8)
    }

    /// Returns the effective sample-size tolerance, defaulting to 5.0.
    pub fn effective_sample_size_tolerance(&self) -> f64 {
        self.sample_size_tolerance.unwrap_or(5.0)
    }

    /// Returns the effective relative tolerance, defaulting to 0.1.
    pub fn effective_relative_tolerance(&self) -> f64 {
        self.relative_tolerance.unwrap_or(0.1)
    }
}
