//! Finding and summary types produced by the ground-truth engine.

use std::collections::BTreeMap;
use std::fmt;

use mirage_core::config::EffectSizeThresholds;
use serde::{Deserialize, Serialize};

/// Direction of a confirmed correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Effect-size bands for correlations and associations.
///
/// Three ascending cut points (small/medium/large) map to weak/moderate/
/// strong; anything below the smallest cut point is negligible and never
/// reported as a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectStrength {
    Negligible,
    Weak,
    Moderate,
    Strong,
}

impl EffectStrength {
    /// Classify an absolute effect size (|r| or Cramér's V) against the
    /// configured cut points.
    pub fn classify(value: f64, thresholds: &EffectSizeThresholds) -> Self {
        let v = value.abs();
        if v >= thresholds.effective_large() {
            Self::Strong
        } else if v >= thresholds.effective_medium() {
            Self::Moderate
        } else if v >= thresholds.effective_small() {
            Self::Weak
        } else {
            Self::Negligible
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for EffectStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// p-value-based banding for group differences.
///
/// A coarser two-level scale, deliberately distinct from [`EffectStrength`]:
/// `Significant` when p < 0.01, `Moderate` otherwise (the pair already
/// passed the configured significance level to be reported at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceStrength {
    Moderate,
    Significant,
}

impl DifferenceStrength {
    pub fn from_p_value(p: f64) -> Self {
        if p < 0.01 {
            Self::Significant
        } else {
            Self::Moderate
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::Significant => "significant",
        }
    }
}

impl fmt::Display for DifferenceStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coefficient and its two-sided p-value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CorrelationStat {
    pub r: f64,
    pub p: f64,
}

/// A significant correlation between two numeric columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationFinding {
    pub var1: String,
    pub var2: String,
    pub pearson: CorrelationStat,
    pub spearman: CorrelationStat,
    pub strength: EffectStrength,
    pub direction: Direction,
}

/// Which test established a group difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupTest {
    #[serde(rename = "t-test")]
    TTest,
    #[serde(rename = "anova")]
    Anova,
}

impl GroupTest {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TTest => "t-test",
            Self::Anova => "anova",
        }
    }
}

impl fmt::Display for GroupTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A significant difference of a numeric column across the groups of a
/// categorical column.
///
/// `direction` renders as `"<highest group> > <lowest group>"` from means
/// over ALL categories, including singleton groups the test itself dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDifferenceFinding {
    /// Categorical grouping column.
    pub var1: String,
    /// Numeric measured column.
    pub var2: String,
    pub test: GroupTest,
    pub p_value: f64,
    pub statistic: f64,
    pub strength: DifferenceStrength,
    pub direction: String,
    pub group_means: BTreeMap<String, f64>,
}

/// A significant association between two categorical columns
/// (chi-square test of independence, strength via Cramér's V).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationFinding {
    pub var1: String,
    pub var2: String,
    pub p_value: f64,
    pub chi2: f64,
    pub cramers_v: f64,
    pub strength: EffectStrength,
}

/// A confirmed statistical relationship, tagged by how it was established.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Finding {
    Correlation(CorrelationFinding),
    GroupDifference(GroupDifferenceFinding),
    Association(AssociationFinding),
}

impl Finding {
    /// The pair of columns this finding relates.
    pub fn vars(&self) -> (&str, &str) {
        match self {
            Self::Correlation(f) => (&f.var1, &f.var2),
            Self::GroupDifference(f) => (&f.var1, &f.var2),
            Self::Association(f) => (&f.var1, &f.var2),
        }
    }

    /// Whether this finding relates the given unordered pair.
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        let (v1, v2) = self.vars();
        (v1 == a && v2 == b) || (v1 == b && v2 == a)
    }

    /// Direction rendered the way reports show it and the validator
    /// compares it: "positive"/"negative" for correlations,
    /// "<highest> > <lowest>" for group differences, "associated" for
    /// categorical associations.
    pub fn direction_label(&self) -> String {
        match self {
            Self::Correlation(f) => f.direction.name().to_string(),
            Self::GroupDifference(f) => f.direction.clone(),
            Self::Association(_) => "associated".to_string(),
        }
    }
}

/// Descriptive statistics of a numeric column (missing values dropped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Value-frequency table of a categorical column (missing values dropped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub count: usize,
    pub value_counts: BTreeMap<String, usize>,
}

/// Per-column summary, tagged with the column's declared kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

impl ColumnSummary {
    /// Count of non-missing observations.
    pub fn count(&self) -> usize {
        match self {
            Self::Numeric(s) => s.count,
            Self::Categorical(s) => s.count,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericSummary> {
        match self {
            Self::Numeric(s) => Some(s),
            Self::Categorical(_) => None,
        }
    }
}

/// A named per-column profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub summary: ColumnSummary,
}

/// Ordered per-column profiles: numeric columns first (in dataset order),
/// then categorical. "First variable" semantics elsewhere depend on this
/// ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub columns: Vec<ColumnProfile>,
}

impl DatasetSummary {
    pub fn get(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|p| p.name == name).map(|p| &p.summary)
    }

    pub fn first(&self) -> Option<&ColumnProfile> {
        self.columns.first()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The full catalogue of statistically verified relationships and
/// per-column summaries for one dataset. Built once per analysis run,
/// read-only thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroundTruth {
    pub summary: DatasetSummary,
    pub correlations: Vec<CorrelationFinding>,
    pub group_differences: Vec<GroupDifferenceFinding>,
    pub categorical_associations: Vec<AssociationFinding>,
}

impl GroundTruth {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a finding relating the unordered pair `(a, b)`, checking
    /// correlations, then group differences, then categorical associations.
    pub fn find_relationship(&self, a: &str, b: &str) -> Option<Finding> {
        if let Some(f) = self.correlations.iter().find(|f| pair_matches(&f.var1, &f.var2, a, b)) {
            return Some(Finding::Correlation(f.clone()));
        }
        if let Some(f) = self
            .group_differences
            .iter()
            .find(|f| pair_matches(&f.var1, &f.var2, a, b))
        {
            return Some(Finding::GroupDifference(f.clone()));
        }
        if let Some(f) = self
            .categorical_associations
            .iter()
            .find(|f| pair_matches(&f.var1, &f.var2, a, b))
        {
            return Some(Finding::Association(f.clone()));
        }
        None
    }
}

fn pair_matches(v1: &str, v2: &str, a: &str, b: &str) -> bool {
    (v1 == a && v2 == b) || (v1 == b && v2 == a)
}
