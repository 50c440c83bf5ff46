//! The ground-truth engine: per-column summaries plus three pairwise
//! scans, each pair tested independently and skipped on degeneracy.

use std::collections::BTreeMap;

use mirage_core::config::StatisticsConfig;
use mirage_core::errors::StatError;
use tracing::{debug, info, warn};

use crate::dataset::{Column, Dataset};

use super::association::{self, ContingencyTable};
use super::correlation;
use super::group_difference;
use super::summary;
use super::types::{
    AssociationFinding, CorrelationFinding, DifferenceStrength, Direction, EffectStrength,
    GroundTruth, GroupDifferenceFinding, GroupTest,
};

/// Computes the statistical ground truth for a dataset.
///
/// Never fails on a well-formed dataset: degenerate pairs are logged and
/// skipped, and an empty or zero-column dataset yields an empty catalogue.
#[derive(Debug, Clone)]
pub struct TruthEngine {
    config: StatisticsConfig,
}

impl TruthEngine {
    pub fn new(config: StatisticsConfig) -> Self {
        Self { config }
    }

    /// Run the full analysis: summaries, correlations, group differences,
    /// and categorical associations.
    pub fn analyze(&self, dataset: &Dataset) -> GroundTruth {
        if dataset.columns().is_empty() || dataset.row_count() == 0 {
            warn!("empty dataset, returning empty ground truth");
            return GroundTruth::empty();
        }

        info!(
            columns = dataset.columns().len(),
            rows = dataset.row_count(),
            "starting statistical analysis"
        );

        let truth = GroundTruth {
            summary: summary::summarize(dataset),
            correlations: self.scan_correlations(dataset),
            group_differences: self.scan_group_differences(dataset),
            categorical_associations: self.scan_associations(dataset),
        };

        info!(
            correlations = truth.correlations.len(),
            group_differences = truth.group_differences.len(),
            associations = truth.categorical_associations.len(),
            "statistical analysis complete"
        );
        truth
    }

    /// Every unordered pair of numeric columns, significance-gated on the
    /// smaller of the Pearson/Spearman p-values and banded on the larger
    /// of the absolute coefficients.
    fn scan_correlations(&self, dataset: &Dataset) -> Vec<CorrelationFinding> {
        let alpha = self.config.effective_significance_level();
        let numeric: Vec<&Column> = dataset.numeric_columns().collect();
        let mut findings = Vec::new();

        for i in 0..numeric.len() {
            for j in (i + 1)..numeric.len() {
                let (a, b) = (numeric[i], numeric[j]);
                let pair = match correlation::test_pair(
                    &a.name,
                    a.as_numeric().unwrap_or(&[]),
                    &b.name,
                    b.as_numeric().unwrap_or(&[]),
                ) {
                    Ok(pair) => pair,
                    Err(err) => {
                        log_skip("correlation", &a.name, &b.name, &err);
                        continue;
                    }
                };

                if pair.pearson.p >= alpha && pair.spearman.p >= alpha {
                    continue;
                }

                let effect = pair.pearson.r.abs().max(pair.spearman.r.abs());
                let strength = EffectStrength::classify(effect, &self.config.effect_size_thresholds);
                if strength == EffectStrength::Negligible {
                    debug!(var1 = %a.name, var2 = %b.name, effect, "significant but negligible, discarded");
                    continue;
                }

                findings.push(CorrelationFinding {
                    var1: a.name.clone(),
                    var2: b.name.clone(),
                    pearson: pair.pearson,
                    spearman: pair.spearman,
                    strength,
                    direction: if pair.pearson.r > 0.0 {
                        Direction::Positive
                    } else {
                        Direction::Negative
                    },
                });
            }
        }
        findings
    }

    /// Every (categorical, numeric) pair: Welch's t-test for exactly two
    /// usable groups, one-way ANOVA for three or more.
    fn scan_group_differences(&self, dataset: &Dataset) -> Vec<GroupDifferenceFinding> {
        let alpha = self.config.effective_significance_level();
        let mut findings = Vec::new();

        for num in dataset.numeric_columns() {
            for cat in dataset.categorical_columns() {
                match self.test_group_pair(cat, num, alpha) {
                    Ok(Some(finding)) => findings.push(finding),
                    Ok(None) => {}
                    Err(err) => log_skip("group difference", &cat.name, &num.name, &err),
                }
            }
        }
        findings
    }

    fn test_group_pair(
        &self,
        cat: &Column,
        num: &Column,
        alpha: f64,
    ) -> Result<Option<GroupDifferenceFinding>, StatError> {
        let labels = cat.as_categorical().unwrap_or(&[]);
        let values = num.as_numeric().unwrap_or(&[]);

        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for (label, value) in labels.iter().zip(values.iter()) {
            if let (Some(l), Some(v)) = (label, value) {
                if v.is_finite() {
                    groups.entry(l.clone()).or_default().push(*v);
                }
            }
        }

        // Groups below 2 observations are unusable for the test but still
        // contribute to the direction computed below.
        let usable: Vec<&[f64]> =
            groups.values().filter(|g| g.len() >= 2).map(|g| g.as_slice()).collect();
        if usable.len() < 2 {
            debug!(var1 = %cat.name, var2 = %num.name, "fewer than 2 usable groups, skipped");
            return Ok(None);
        }

        let (test, statistic, p_value) = if usable.len() == 2 {
            let (t, p) = group_difference::welch_t_test(usable[0], usable[1])?;
            (GroupTest::TTest, t, p)
        } else {
            let (f, p) = group_difference::one_way_anova(&usable)?;
            (GroupTest::Anova, f, p)
        };

        if p_value >= alpha {
            return Ok(None);
        }

        let group_means: BTreeMap<String, f64> = groups
            .iter()
            .map(|(name, vals)| (name.clone(), vals.iter().sum::<f64>() / vals.len() as f64))
            .collect();

        // Direction ranks ALL categories by mean, including singleton
        // groups the test itself dropped.
        let mut highest: (&str, f64) = ("", f64::NEG_INFINITY);
        let mut lowest: (&str, f64) = ("", f64::INFINITY);
        for (name, mean) in &group_means {
            if *mean > highest.1 {
                highest = (name, *mean);
            }
            if *mean < lowest.1 {
                lowest = (name, *mean);
            }
        }

        Ok(Some(GroupDifferenceFinding {
            var1: cat.name.clone(),
            var2: num.name.clone(),
            test,
            p_value,
            statistic,
            strength: DifferenceStrength::from_p_value(p_value),
            direction: format!("{} > {}", highest.0, lowest.0),
            group_means,
        }))
    }

    /// Every unordered pair of categorical columns, chi-square gated on
    /// significance and banded on Cramér's V.
    fn scan_associations(&self, dataset: &Dataset) -> Vec<AssociationFinding> {
        let alpha = self.config.effective_significance_level();
        let cats: Vec<&Column> = dataset.categorical_columns().collect();
        let mut findings = Vec::new();

        for i in 0..cats.len() {
            for j in (i + 1)..cats.len() {
                let (a, b) = (cats[i], cats[j]);
                let table: ContingencyTable = association::contingency_table(
                    a.as_categorical().unwrap_or(&[]),
                    b.as_categorical().unwrap_or(&[]),
                );

                if table.rows() < 2 || table.cols() < 2 || table.n < 2 {
                    debug!(var1 = %a.name, var2 = %b.name, "contingency table too small, skipped");
                    continue;
                }

                let result = match association::chi_square(&table) {
                    Ok(result) => result,
                    Err(err) => {
                        log_skip("association", &a.name, &b.name, &err);
                        continue;
                    }
                };

                if result.p_value >= alpha {
                    continue;
                }

                let strength =
                    EffectStrength::classify(result.cramers_v, &self.config.effect_size_thresholds);
                if strength == EffectStrength::Negligible {
                    debug!(var1 = %a.name, var2 = %b.name, cramers_v = result.cramers_v,
                        "significant but negligible, discarded");
                    continue;
                }

                findings.push(AssociationFinding {
                    var1: a.name.clone(),
                    var2: b.name.clone(),
                    p_value: result.p_value,
                    chi2: result.chi2,
                    cramers_v: result.cramers_v,
                    strength,
                });
            }
        }
        findings
    }
}

/// Degenerate data is expected and logs at debug; anything else warns.
fn log_skip(scan: &str, var1: &str, var2: &str, err: &StatError) {
    match err {
        StatError::InsufficientData { .. } | StatError::ZeroVariance { .. } => {
            debug!(scan, var1, var2, %err, "pair skipped");
        }
        StatError::DegenerateTest { .. } | StatError::NonFiniteStatistic { .. } => {
            warn!(scan, var1, var2, %err, "pair skipped");
        }
    }
}
