//! Statistical degeneracy errors.
//!
//! Every pairwise test helper returns `Result<_, StatError>`; the engine
//! logs the error and skips the pair. A `StatError` never escapes
//! `analyze` — the overall analysis always completes.

/// Per-pair failures of the statistical ground-truth engine.
#[derive(Debug, thiserror::Error)]
pub enum StatError {
    #[error("Insufficient paired observations: needed {needed}, got {actual}")]
    InsufficientData { needed: usize, actual: usize },

    #[error("Column '{column}' has zero variance")]
    ZeroVariance { column: String },

    #[error("{test} degenerate: {message}")]
    DegenerateTest { test: &'static str, message: String },

    #[error("{test} produced a non-finite statistic")]
    NonFiniteStatistic { test: &'static str },
}
