//! Analysis engine for Mirage: statistical ground truth, claim parsing,
//! claim validation, and hallucination metrics.
//!
//! The pipeline is four pure stages over immutable inputs:
//!
//! 1. dataset → [`truth::TruthEngine::analyze`] → [`truth::GroundTruth`]
//! 2. model output → [`claims::ClaimParser::parse`] → [`claims::Claim`] list
//! 3. (claims, ground truth, column names) →
//!    [`validate::ClaimValidator::validate`] → [`validate::ValidationVerdict`] list
//! 4. verdicts → [`metrics::HallucinationMetrics::from_verdicts`]
//!
//! Stages 1 and 2 are independent; stage 3 consumes both, stage 4 consumes
//! stage 3. No stage holds shared mutable state — callers wanting parallel
//! runs instantiate separate components.

pub mod claims;
pub mod dataset;
pub mod metrics;
pub mod truth;
pub mod validate;

pub use claims::{Claim, ClaimParser};
pub use dataset::{Column, ColumnValues, Dataset};
pub use metrics::HallucinationMetrics;
pub use truth::{Finding, GroundTruth, TruthEngine};
pub use validate::{ClaimValidator, ValidationVerdict, VerdictStatus};
