//! Aggregate hallucination metrics over a verdict list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validate::{ValidationVerdict, VerdictStatus};

/// Aggregate rates computed by scanning a verdict list.
///
/// The three counts partition the total: every verdict is exactly one of
/// valid, hallucinated (any subtype), or unverified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HallucinationMetrics {
    pub total_claims: usize,
    pub valid_claims: usize,
    pub hallucinations: usize,
    pub unverified: usize,
    /// hallucinations / total, rounded to 4 decimal places.
    pub hallucination_rate: f64,
    /// valid / total, rounded to 4 decimal places.
    pub insight_validity_score: f64,
}

impl HallucinationMetrics {
    /// All-zero record, the result for an empty verdict list.
    pub fn zero() -> Self {
        Self {
            total_claims: 0,
            valid_claims: 0,
            hallucinations: 0,
            unverified: 0,
            hallucination_rate: 0.0,
            insight_validity_score: 0.0,
        }
    }

    /// Scan a verdict list into aggregate counts and rates.
    pub fn from_verdicts(verdicts: &[ValidationVerdict]) -> Self {
        let total_claims = verdicts.len();
        if total_claims == 0 {
            debug!("no verdicts, returning zero metrics");
            return Self::zero();
        }

        let valid_claims =
            verdicts.iter().filter(|v| v.status == VerdictStatus::Valid).count();
        let hallucinations = verdicts.iter().filter(|v| v.status.is_hallucination()).count();
        let unverified =
            verdicts.iter().filter(|v| v.status == VerdictStatus::Unverified).count();

        Self {
            total_claims,
            valid_claims,
            hallucinations,
            unverified,
            hallucination_rate: round4(hallucinations as f64 / total_claims as f64),
            insight_validity_score: round4(valid_claims as f64 / total_claims as f64),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
