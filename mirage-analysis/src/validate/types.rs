//! Verdict types produced by the validator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::claims::Claim;
use crate::truth::Finding;

/// Terminal outcome of validating one claim. Every claim ends in exactly
/// one status; there are no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    Valid,
    Unverified,
    HallucinationRelationship,
    HallucinationDirection,
    HallucinationStrength,
}

impl VerdictStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Unverified => "UNVERIFIED",
            Self::HallucinationRelationship => "HALLUCINATION_RELATIONSHIP",
            Self::HallucinationDirection => "HALLUCINATION_DIRECTION",
            Self::HallucinationStrength => "HALLUCINATION_STRENGTH",
        }
    }

    /// Covers all hallucination subtypes.
    pub fn is_hallucination(&self) -> bool {
        matches!(
            self,
            Self::HallucinationRelationship
                | Self::HallucinationDirection
                | Self::HallucinationStrength
        )
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The validator's conclusion for a single claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub claim: Claim,
    /// Resolved column names, first-found order.
    pub extracted_vars: Vec<String>,
    pub status: VerdictStatus,
    pub reason: String,
    /// The matched finding, for statuses established against one.
    pub ground_truth: Option<Finding>,
}
