//! Per-column descriptive statistics.

use std::collections::BTreeMap;

use crate::dataset::Dataset;

use super::types::{
    CategoricalSummary, ColumnProfile, ColumnSummary, DatasetSummary, NumericSummary,
};

/// Summarize every column: numeric columns first (dataset order), then
/// categorical. Downstream "first variable" lookups rely on this ordering.
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let mut columns = Vec::with_capacity(dataset.columns().len());

    for col in dataset.numeric_columns() {
        let values = col.as_numeric().unwrap_or(&[]);
        columns.push(ColumnProfile {
            name: col.name.clone(),
            summary: ColumnSummary::Numeric(numeric_summary(values)),
        });
    }

    for col in dataset.categorical_columns() {
        let values = col.as_categorical().unwrap_or(&[]);
        columns.push(ColumnProfile {
            name: col.name.clone(),
            summary: ColumnSummary::Categorical(categorical_summary(values)),
        });
    }

    DatasetSummary { columns }
}

/// Describe the non-missing values of a numeric column.
///
/// Quartiles use linear interpolation over the sorted values. A column
/// with no observations reports count 0 and NaN statistics.
pub fn numeric_summary(values: &[Option<f64>]) -> NumericSummary {
    let mut xs: Vec<f64> = values.iter().filter_map(|v| *v).filter(|v| v.is_finite()).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = xs.len();
    if count == 0 {
        return NumericSummary {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        };
    }

    let n = count as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let std = if count > 1 {
        (xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        f64::NAN
    };

    NumericSummary {
        count,
        mean,
        std,
        min: xs[0],
        q1: quantile(&xs, 0.25),
        median: quantile(&xs, 0.5),
        q3: quantile(&xs, 0.75),
        max: xs[count - 1],
    }
}

/// Value-frequency table of the non-missing values of a categorical column.
pub fn categorical_summary(values: &[Option<String>]) -> CategoricalSummary {
    let mut value_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut count = 0;
    for v in values.iter().flatten() {
        *value_counts.entry(v.clone()).or_insert(0) += 1;
        count += 1;
    }
    CategoricalSummary { count, value_counts }
}

/// Quantile of sorted values by linear interpolation:
/// position q·(n−1), fractional part interpolated between neighbors.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}
