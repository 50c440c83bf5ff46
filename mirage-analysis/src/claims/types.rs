//! Structured claim types produced by the parser.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction asserted by a claim, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimDirection {
    Positive,
    Negative,
    Unknown,
}

impl ClaimDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_explicit(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ClaimDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength asserted by a claim, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStrength {
    Weak,
    Moderate,
    Strong,
    Unknown,
}

impl ClaimStrength {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ClaimStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One extracted statement from model-generated output.
///
/// `variables` stays empty at parse time; the validator resolves column
/// references into its own verdict rather than mutating the claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub original_text: String,
    pub variables: Vec<String>,
    /// Default relationship assumption; kept so report consumers see a
    /// stable shape.
    pub relationship: String,
    pub direction: ClaimDirection,
    pub strength: ClaimStrength,
    /// Heuristic confidence in [0, 1].
    pub confidence_score: f64,
}

impl Claim {
    /// A claim with default fields, before keyword refinement.
    pub fn new(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            variables: Vec::new(),
            relationship: "correlation".to_string(),
            direction: ClaimDirection::Unknown,
            strength: ClaimStrength::Unknown,
            confidence_score: 0.5,
        }
    }
}
