//! Pairwise correlation testing — Pearson and Spearman with two-sided
//! p-values via the t transform `t = r·sqrt((n−2)/(1−r²))`.

use mirage_core::errors::StatError;
use statrs::distribution::{ContinuousCDF, StudentsT};

use super::types::CorrelationStat;

/// Both coefficients for one column pair, after pairwise missing-value drop.
#[derive(Debug, Clone, Copy)]
pub struct PairCorrelation {
    pub pearson: CorrelationStat,
    pub spearman: CorrelationStat,
    /// Number of paired observations used.
    pub n: usize,
}

/// Test one unordered pair of numeric columns.
///
/// Rows missing (or non-finite) on either side are dropped. Fails with a
/// skippable [`StatError`] when fewer than 2 paired observations remain or
/// either side is constant.
pub fn test_pair(
    name1: &str,
    xs: &[Option<f64>],
    name2: &str,
    ys: &[Option<f64>],
) -> Result<PairCorrelation, StatError> {
    let paired: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(a), Some(b)) if a.is_finite() && b.is_finite() => Some((*a, *b)),
            _ => None,
        })
        .collect();

    let n = paired.len();
    if n < 2 {
        return Err(StatError::InsufficientData { needed: 2, actual: n });
    }

    let x: Vec<f64> = paired.iter().map(|(a, _)| *a).collect();
    let y: Vec<f64> = paired.iter().map(|(_, b)| *b).collect();

    if is_constant(&x) {
        return Err(StatError::ZeroVariance { column: name1.to_string() });
    }
    if is_constant(&y) {
        return Err(StatError::ZeroVariance { column: name2.to_string() });
    }

    let r_pearson = pearson_r(&x, &y);
    let r_spearman = pearson_r(&average_ranks(&x), &average_ranks(&y));

    if !r_pearson.is_finite() {
        return Err(StatError::NonFiniteStatistic { test: "pearson" });
    }
    if !r_spearman.is_finite() {
        return Err(StatError::NonFiniteStatistic { test: "spearman" });
    }

    Ok(PairCorrelation {
        pearson: CorrelationStat { r: r_pearson, p: two_sided_p(r_pearson, n) },
        spearman: CorrelationStat { r: r_spearman, p: two_sided_p(r_spearman, n) },
        n,
    })
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Pearson product-moment coefficient.
pub fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }

    let denom = (vx * vy).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    // Clamp against floating-point drift past ±1.
    (cov / denom).clamp(-1.0, 1.0)
}

/// Ranks with ties assigned their average rank (1-based).
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a].partial_cmp(&values[b]).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Ranks i+1 ..= j+1 tie; assign their mean.
        let avg = (i + 1 + j + 1) as f64 / 2.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg;
        }
        i = j + 1;
    }
    ranks
}

/// Two-sided p-value for a correlation coefficient with n observations.
///
/// Degrees of freedom n − 2; |r| = 1 yields p = 0; n = 2 yields p = 1.
pub fn two_sided_p(r: f64, n: usize) -> f64 {
    if n < 3 {
        return 1.0;
    }
    let df = (n - 2) as f64;
    let denom = 1.0 - r * r;
    if denom <= f64::EPSILON {
        return 0.0;
    }
    let t = r * (df / denom).sqrt();
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive_correlation() {
        let xs: Vec<Option<f64>> = (1..=10).map(|i| Some(i as f64)).collect();
        let ys: Vec<Option<f64>> = (1..=10).map(|i| Some(2.0 * i as f64 + 1.0)).collect();
        let result = test_pair("x", &xs, "y", &ys).unwrap();
        assert!((result.pearson.r - 1.0).abs() < 1e-12);
        assert!((result.spearman.r - 1.0).abs() < 1e-12);
        assert!(result.pearson.p < 1e-9);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let xs: Vec<Option<f64>> = (1..=10).map(|i| Some(i as f64)).collect();
        let ys: Vec<Option<f64>> = (1..=10).map(|i| Some(-3.0 * i as f64)).collect();
        let result = test_pair("x", &xs, "y", &ys).unwrap();
        assert!((result.pearson.r + 1.0).abs() < 1e-12);
        assert!(result.pearson.p < 1e-9);
    }

    #[test]
    fn test_constant_column_is_zero_variance() {
        let xs: Vec<Option<f64>> = vec![Some(5.0); 10];
        let ys: Vec<Option<f64>> = (1..=10).map(|i| Some(i as f64)).collect();
        let err = test_pair("flat", &xs, "y", &ys).unwrap_err();
        assert!(matches!(err, StatError::ZeroVariance { ref column } if column == "flat"));
    }

    #[test]
    fn test_pairwise_missing_drop() {
        // Only 1 complete pair remains — insufficient.
        let xs = vec![Some(1.0), None, Some(3.0)];
        let ys = vec![Some(2.0), Some(4.0), None];
        let err = test_pair("x", &xs, "y", &ys).unwrap_err();
        assert!(matches!(err, StatError::InsufficientData { actual: 1, .. }));
    }

    #[test]
    fn test_average_ranks_with_ties() {
        let ranks = average_ranks(&[10.0, 20.0, 20.0, 30.0]);
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn test_spearman_monotone_nonlinear() {
        // y = x³ is monotone: Spearman = 1, Pearson < 1.
        let xs: Vec<Option<f64>> = (1..=8).map(|i| Some(i as f64)).collect();
        let ys: Vec<Option<f64>> = (1..=8).map(|i| Some((i as f64).powi(3))).collect();
        let result = test_pair("x", &xs, "y", &ys).unwrap();
        assert!((result.spearman.r - 1.0).abs() < 1e-12);
        assert!(result.pearson.r < 1.0);
        assert!(result.pearson.r > 0.8);
    }

    #[test]
    fn test_two_observations_give_p_one() {
        let xs = vec![Some(1.0), Some(2.0)];
        let ys = vec![Some(3.0), Some(5.0)];
        let result = test_pair("x", &xs, "y", &ys).unwrap();
        assert_eq!(result.pearson.p, 1.0);
    }

    #[test]
    fn test_uncorrelated_data_high_p() {
        let xs = vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)];
        let ys = vec![Some(3.0), Some(1.0), Some(4.0), Some(1.0), Some(5.0), Some(2.0)];
        let result = test_pair("x", &xs, "y", &ys).unwrap();
        assert!(result.pearson.p > 0.05);
    }
}
