//! Group-mean difference testing — Welch's t-test for two groups,
//! one-way ANOVA for three or more.

use mirage_core::errors::StatError;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

/// Welch's unequal-variance t-test between two groups.
///
/// Returns `(t, two-sided p)`. Callers must pass groups with at least 2
/// observations each. Identical groups with zero pooled variance are
/// degenerate; distinct means over zero variance yield an infinite
/// statistic with p = 0.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<(f64, f64), StatError> {
    let (n1, n2) = (a.len(), b.len());
    if n1 < 2 || n2 < 2 {
        return Err(StatError::InsufficientData { needed: 2, actual: n1.min(n2) });
    }

    let m1 = mean(a);
    let m2 = mean(b);
    let v1 = sample_variance(a, m1);
    let v2 = sample_variance(b, m2);

    let se1 = v1 / n1 as f64;
    let se2 = v2 / n2 as f64;
    let pooled = se1 + se2;

    if pooled <= 0.0 {
        if m1 == m2 {
            return Err(StatError::DegenerateTest {
                test: "t-test",
                message: "zero variance in both groups with equal means".to_string(),
            });
        }
        // Distinct means over zero spread: unbounded evidence.
        let t = if m1 > m2 { f64::INFINITY } else { f64::NEG_INFINITY };
        return Ok((t, 0.0));
    }

    let t = (m1 - m2) / pooled.sqrt();
    if !t.is_finite() {
        return Err(StatError::NonFiniteStatistic { test: "t-test" });
    }

    // Welch–Satterthwaite degrees of freedom.
    let df = pooled * pooled
        / (se1 * se1 / (n1 as f64 - 1.0) + se2 * se2 / (n2 as f64 - 1.0));
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| StatError::DegenerateTest {
        test: "t-test",
        message: e.to_string(),
    })?;

    let p = (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0);
    Ok((t, p))
}

/// One-way ANOVA across `k ≥ 2` groups.
///
/// Returns `(F, p)`. Callers must pass groups with at least 2 observations
/// each. Zero within-group variance with distinct group means yields an
/// infinite statistic with p = 0; all observations identical is degenerate.
pub fn one_way_anova(groups: &[&[f64]]) -> Result<(f64, f64), StatError> {
    let k = groups.len();
    if k < 2 {
        return Err(StatError::InsufficientData { needed: 2, actual: k });
    }

    let total_n: usize = groups.iter().map(|g| g.len()).sum();
    let grand_mean = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / total_n as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for g in groups {
        let m = mean(g);
        ss_between += g.len() as f64 * (m - grand_mean).powi(2);
        ss_within += g.iter().map(|x| (x - m).powi(2)).sum::<f64>();
    }

    let df1 = (k - 1) as f64;
    let df2 = (total_n - k) as f64;
    if df2 <= 0.0 {
        return Err(StatError::InsufficientData { needed: k + 1, actual: total_n });
    }

    if ss_within <= 0.0 {
        if ss_between <= 0.0 {
            return Err(StatError::DegenerateTest {
                test: "anova",
                message: "all observations identical".to_string(),
            });
        }
        return Ok((f64::INFINITY, 0.0));
    }

    let f_stat = (ss_between / df1) / (ss_within / df2);
    if !f_stat.is_finite() {
        return Err(StatError::NonFiniteStatistic { test: "anova" });
    }

    let dist = FisherSnedecor::new(df1, df2).map_err(|e| StatError::DegenerateTest {
        test: "anova",
        message: e.to_string(),
    })?;
    let p = (1.0 - dist.cdf(f_stat)).clamp(0.0, 1.0);
    Ok((f_stat, p))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0)
}
