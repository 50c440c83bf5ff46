//! Categorical association testing — chi-square test of independence
//! with Cramér's V as the effect size.

use std::collections::BTreeMap;

use mirage_core::errors::StatError;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Observed counts for one pair of categorical columns.
///
/// Labels are sorted; rows index the first column's values, columns the
/// second's. Rows with a missing value on either side are excluded.
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub counts: Vec<Vec<usize>>,
    /// Total paired observations.
    pub n: usize,
}

impl ContingencyTable {
    pub fn rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn cols(&self) -> usize {
        self.col_labels.len()
    }
}

/// Cross-tabulate two categorical columns, dropping rows missing on
/// either side.
pub fn contingency_table(xs: &[Option<String>], ys: &[Option<String>]) -> ContingencyTable {
    let mut cells: BTreeMap<(String, String), usize> = BTreeMap::new();
    let mut n = 0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        if let (Some(a), Some(b)) = (x, y) {
            *cells.entry((a.clone(), b.clone())).or_insert(0) += 1;
            n += 1;
        }
    }

    let mut row_labels: Vec<String> = cells.keys().map(|(a, _)| a.clone()).collect();
    row_labels.dedup();
    let mut col_labels: Vec<String> = cells.keys().map(|(_, b)| b.clone()).collect();
    col_labels.sort();
    col_labels.dedup();

    let mut counts = vec![vec![0usize; col_labels.len()]; row_labels.len()];
    for ((a, b), count) in &cells {
        let i = row_labels.iter().position(|l| l == a).unwrap_or(0);
        let j = col_labels.iter().position(|l| l == b).unwrap_or(0);
        counts[i][j] = *count;
    }

    ContingencyTable { row_labels, col_labels, counts, n }
}

/// Chi-square independence test result.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquareResult {
    pub chi2: f64,
    pub p_value: f64,
    pub dof: usize,
    /// Cramér's V effect size, `sqrt(χ² / (n · (min_dim − 1)))`.
    pub cramers_v: f64,
}

/// Chi-square test of independence over a contingency table.
///
/// Applies Yates' continuity correction when the table is 2×2 (df = 1).
/// Cramér's V is computed from the (possibly corrected) statistic.
pub fn chi_square(table: &ContingencyTable) -> Result<ChiSquareResult, StatError> {
    let (r, c) = (table.rows(), table.cols());
    if r < 2 || c < 2 {
        return Err(StatError::InsufficientData { needed: 2, actual: r.min(c) });
    }
    if table.n < 2 {
        return Err(StatError::InsufficientData { needed: 2, actual: table.n });
    }

    let n = table.n as f64;
    let row_sums: Vec<f64> =
        table.counts.iter().map(|row| row.iter().sum::<usize>() as f64).collect();
    let col_sums: Vec<f64> = (0..c)
        .map(|j| table.counts.iter().map(|row| row[j]).sum::<usize>() as f64)
        .collect();

    let dof = (r - 1) * (c - 1);
    let yates = dof == 1;

    let mut chi2 = 0.0;
    for i in 0..r {
        for j in 0..c {
            let expected = row_sums[i] * col_sums[j] / n;
            if expected <= 0.0 {
                return Err(StatError::DegenerateTest {
                    test: "chi-square",
                    message: "zero expected frequency".to_string(),
                });
            }
            let observed = table.counts[i][j] as f64;
            let deviation = if yates {
                ((observed - expected).abs() - 0.5).max(0.0)
            } else {
                observed - expected
            };
            chi2 += deviation * deviation / expected;
        }
    }

    if !chi2.is_finite() {
        return Err(StatError::NonFiniteStatistic { test: "chi-square" });
    }

    let dist = ChiSquared::new(dof as f64).map_err(|e| StatError::DegenerateTest {
        test: "chi-square",
        message: e.to_string(),
    })?;
    let p_value = (1.0 - dist.cdf(chi2)).clamp(0.0, 1.0);
    if !p_value.is_finite() {
        return Err(StatError::NonFiniteStatistic { test: "chi-square" });
    }

    let min_dim = r.min(c) - 1;
    let cramers_v = if min_dim > 0 && table.n > 0 {
        (chi2 / (n * min_dim as f64)).sqrt()
    } else {
        0.0
    };

    Ok(ChiSquareResult { chi2, p_value, dof, cramers_v })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    fn table_from(counts: Vec<Vec<usize>>) -> ContingencyTable {
        let n = counts.iter().flatten().sum();
        ContingencyTable {
            row_labels: (0..counts.len()).map(|i| format!("r{i}")).collect(),
            col_labels: (0..counts[0].len()).map(|j| format!("c{j}")).collect(),
            counts,
            n,
        }
    }

    #[test]
    fn test_contingency_table_drops_missing() {
        let xs = vec![Some("a".to_string()), Some("b".to_string()), None, Some("a".to_string())];
        let ys = vec![Some("x".to_string()), Some("y".to_string()), Some("x".to_string()), None];
        let table = contingency_table(&xs, &ys);
        assert_eq!(table.n, 2);
        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 2);
        assert_eq!(table.counts[0][0], 1); // (a, x)
        assert_eq!(table.counts[1][1], 1); // (b, y)
    }

    #[test]
    fn test_chi_square_known_value_without_correction() {
        // 2x3 table, all expected = 20: χ² = 20 on 2 df
        let table = table_from(vec![vec![10, 20, 30], vec![30, 20, 10]]);
        let result = chi_square(&table).unwrap();
        assert_eq!(result.dof, 2);
        assert!((result.chi2 - 20.0).abs() < 1e-9);
        assert!(result.p_value < 1e-4);
        assert!((result.cramers_v - (20.0f64 / 120.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_chi_square_yates_correction_on_2x2() {
        // Expected all 15; uncorrected χ² = 6.667, corrected = 5.4
        let table = table_from(vec![vec![10, 20], vec![20, 10]]);
        let result = chi_square(&table).unwrap();
        assert_eq!(result.dof, 1);
        assert!((result.chi2 - 5.4).abs() < 1e-9);
        assert!(result.p_value > 0.015 && result.p_value < 0.025, "p = {}", result.p_value);
        assert!((result.cramers_v - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_chi_square_independent_columns_high_p() {
        // Proportional rows: no association.
        let table = table_from(vec![vec![20, 40], vec![10, 20]]);
        let result = chi_square(&table).unwrap();
        assert!(result.p_value > 0.5);
    }

    #[test]
    fn test_single_level_dimension_is_insufficient() {
        let xs = cats(&["a", "a", "a"]);
        let ys = cats(&["x", "y", "x"]);
        let table = contingency_table(&xs, &ys);
        assert_eq!(table.rows(), 1);
        let err = chi_square(&table).unwrap_err();
        assert!(matches!(err, StatError::InsufficientData { .. }));
    }

    #[test]
    fn test_strong_association() {
        // x == y on every row: perfect association.
        let labels: Vec<&str> = ["p", "q"].iter().cycle().take(40).copied().collect();
        let xs = cats(&labels);
        let ys = cats(&labels);
        let table = contingency_table(&xs, &ys);
        let result = chi_square(&table).unwrap();
        assert!(result.p_value < 0.001);
        assert!(result.cramers_v > 0.8);
    }
}
