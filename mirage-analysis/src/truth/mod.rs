//! Statistical ground-truth engine.
//!
//! Discovers significant relationships in a dataset: pairwise numeric
//! correlations, group-mean differences, and categorical associations,
//! plus per-column descriptive summaries. The resulting [`GroundTruth`]
//! catalogue is the arbiter of claim correctness for the validator.

pub mod association;
pub mod correlation;
pub mod engine;
pub mod group_difference;
pub mod summary;
pub mod types;

pub use engine::TruthEngine;
pub use types::{
    AssociationFinding, CategoricalSummary, ColumnProfile, ColumnSummary, CorrelationFinding,
    CorrelationStat, DatasetSummary, DifferenceStrength, Direction, EffectStrength, Finding,
    GroundTruth, GroupDifferenceFinding, GroupTest, NumericSummary,
};
