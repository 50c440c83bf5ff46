//! Metrics calculator tests: counting, partitioning, and rounding.

use mirage_analysis::claims::Claim;
use mirage_analysis::metrics::HallucinationMetrics;
use mirage_analysis::validate::{ValidationVerdict, VerdictStatus};

fn verdict(status: VerdictStatus) -> ValidationVerdict {
    ValidationVerdict {
        claim: Claim::new("a claim"),
        extracted_vars: vec![],
        status,
        reason: String::new(),
        ground_truth: None,
    }
}

#[test]
fn test_empty_verdict_list_yields_zero_metrics() {
    let metrics = HallucinationMetrics::from_verdicts(&[]);
    assert_eq!(metrics.total_claims, 0);
    assert_eq!(metrics.valid_claims, 0);
    assert_eq!(metrics.hallucinations, 0);
    assert_eq!(metrics.unverified, 0);
    assert_eq!(metrics.hallucination_rate, 0.0);
    assert_eq!(metrics.insight_validity_score, 0.0);
}

#[test]
fn test_counts_partition_the_verdict_list() {
    let verdicts = vec![
        verdict(VerdictStatus::Valid),
        verdict(VerdictStatus::Valid),
        verdict(VerdictStatus::HallucinationRelationship),
        verdict(VerdictStatus::HallucinationDirection),
        verdict(VerdictStatus::HallucinationStrength),
        verdict(VerdictStatus::Unverified),
    ];
    let metrics = HallucinationMetrics::from_verdicts(&verdicts);

    assert_eq!(metrics.total_claims, 6);
    assert_eq!(metrics.valid_claims, 2);
    assert_eq!(metrics.hallucinations, 3);
    assert_eq!(metrics.unverified, 1);
    assert_eq!(
        metrics.valid_claims + metrics.hallucinations + metrics.unverified,
        metrics.total_claims
    );
    assert_eq!(metrics.hallucination_rate, 0.5);
    assert_eq!(metrics.insight_validity_score, 0.3333);
}

#[test]
fn test_all_hallucination_subtypes_count() {
    let verdicts = vec![
        verdict(VerdictStatus::HallucinationRelationship),
        verdict(VerdictStatus::HallucinationDirection),
        verdict(VerdictStatus::HallucinationStrength),
    ];
    let metrics = HallucinationMetrics::from_verdicts(&verdicts);
    assert_eq!(metrics.hallucinations, 3);
    assert_eq!(metrics.hallucination_rate, 1.0);
    assert_eq!(metrics.insight_validity_score, 0.0);
}

#[test]
fn test_rates_round_to_four_decimals() {
    let verdicts = vec![
        verdict(VerdictStatus::Valid),
        verdict(VerdictStatus::HallucinationRelationship),
        verdict(VerdictStatus::Unverified),
    ];
    let metrics = HallucinationMetrics::from_verdicts(&verdicts);
    assert_eq!(metrics.hallucination_rate, 0.3333);
    assert_eq!(metrics.insight_validity_score, 0.3333);
}

#[test]
fn test_all_valid() {
    let verdicts = vec![verdict(VerdictStatus::Valid); 4];
    let metrics = HallucinationMetrics::from_verdicts(&verdicts);
    assert_eq!(metrics.hallucination_rate, 0.0);
    assert_eq!(metrics.insight_validity_score, 1.0);
}
