//! Ground-truth engine tests: significance gating, effect-size banding,
//! degenerate-pair skipping, and direction rendering.

use mirage_analysis::dataset::{Column, Dataset};
use mirage_analysis::truth::{
    DifferenceStrength, Direction, EffectStrength, GroupTest, TruthEngine,
};
use mirage_core::config::{EffectSizeThresholds, StatisticsConfig};

fn engine() -> TruthEngine {
    TruthEngine::new(StatisticsConfig::default())
}

/// age and cholesterol in lockstep: r = 1 exactly.
fn lockstep_dataset() -> Dataset {
    Dataset::new(vec![
        Column::numeric_complete("age", (0..10).map(|i| 25.0 + 5.0 * i as f64).collect()),
        Column::numeric_complete(
            "cholesterol",
            (0..10).map(|i| 180.0 + 10.0 * i as f64).collect(),
        ),
    ])
}

#[test]
fn test_empty_dataset_yields_empty_catalogue() {
    let truth = engine().analyze(&Dataset::empty());
    assert!(truth.summary.is_empty());
    assert!(truth.correlations.is_empty());
    assert!(truth.group_differences.is_empty());
    assert!(truth.categorical_associations.is_empty());
}

#[test]
fn test_zero_row_dataset_yields_empty_catalogue() {
    let dataset = Dataset::new(vec![
        Column::numeric("age", vec![]),
        Column::categorical("sex", vec![]),
    ]);
    let truth = engine().analyze(&dataset);
    assert!(truth.correlations.is_empty());
    assert!(truth.group_differences.is_empty());
    assert!(truth.categorical_associations.is_empty());
}

#[test]
fn test_lockstep_columns_yield_strong_positive_correlation() {
    let truth = engine().analyze(&lockstep_dataset());

    assert_eq!(truth.correlations.len(), 1);
    let finding = &truth.correlations[0];
    assert_eq!(finding.var1, "age");
    assert_eq!(finding.var2, "cholesterol");
    assert_eq!(finding.strength, EffectStrength::Strong);
    assert_eq!(finding.direction, Direction::Positive);
    assert!((finding.pearson.r - 1.0).abs() < 1e-9);
    assert!(finding.pearson.p < 1e-6);
    assert!((finding.spearman.r - 1.0).abs() < 1e-9);
}

#[test]
fn test_negative_correlation_direction() {
    let dataset = Dataset::new(vec![
        Column::numeric_complete("x", (0..10).map(|i| i as f64).collect()),
        Column::numeric_complete("y", (0..10).map(|i| 100.0 - 7.0 * i as f64).collect()),
    ]);
    let truth = engine().analyze(&dataset);
    assert_eq!(truth.correlations.len(), 1);
    assert_eq!(truth.correlations[0].direction, Direction::Negative);
}

#[test]
fn test_zero_variance_column_emits_no_correlation() {
    let dataset = Dataset::new(vec![
        Column::numeric_complete("flat", vec![5.0; 10]),
        Column::numeric_complete("x", (0..10).map(|i| i as f64).collect()),
    ]);
    let truth = engine().analyze(&dataset);
    assert!(truth.correlations.is_empty());
}

#[test]
fn test_negligible_strength_discarded_despite_significance() {
    // Adjacent swaps give r ≈ 0.939: significant at n = 10, but below a
    // 0.95 "small" cut point.
    let dataset = Dataset::new(vec![
        Column::numeric_complete("x", (1..=10).map(f64::from).collect()),
        Column::numeric_complete(
            "y",
            vec![2.0, 1.0, 4.0, 3.0, 6.0, 5.0, 8.0, 7.0, 10.0, 9.0],
        ),
    ]);

    let strict = TruthEngine::new(StatisticsConfig {
        significance_level: None,
        effect_size_thresholds: EffectSizeThresholds {
            large: Some(0.99),
            medium: Some(0.98),
            small: Some(0.95),
        },
    });
    assert!(strict.analyze(&dataset).correlations.is_empty());

    // The same pair survives the default bands as strong.
    let truth = engine().analyze(&dataset);
    assert_eq!(truth.correlations.len(), 1);
    assert_eq!(truth.correlations[0].strength, EffectStrength::Strong);
}

#[test]
fn test_two_group_difference_uses_welch_t() {
    let dataset = Dataset::new(vec![
        Column::categorical_complete(
            "smoker",
            vec!["yes", "no", "yes", "no", "yes", "no", "yes", "no", "yes", "no"],
        ),
        Column::numeric_complete(
            "charges",
            vec![40.0, 10.0, 42.0, 11.0, 41.0, 12.0, 43.0, 10.0, 44.0, 11.0],
        ),
    ]);
    let truth = engine().analyze(&dataset);

    assert_eq!(truth.group_differences.len(), 1);
    let finding = &truth.group_differences[0];
    assert_eq!(finding.var1, "smoker");
    assert_eq!(finding.var2, "charges");
    assert_eq!(finding.test, GroupTest::TTest);
    assert_eq!(finding.strength, DifferenceStrength::Significant);
    assert_eq!(finding.direction, "yes > no");
    assert!(finding.p_value < 0.01);
    assert_eq!(finding.group_means.len(), 2);
    assert!(finding.group_means["yes"] > finding.group_means["no"]);
}

#[test]
fn test_three_groups_use_anova() {
    let dataset = Dataset::new(vec![
        Column::categorical_complete(
            "region",
            vec!["a", "a", "a", "b", "b", "b", "c", "c", "c"],
        ),
        Column::numeric_complete(
            "score",
            vec![1.0, 2.0, 3.0, 2.0, 3.0, 4.0, 10.0, 11.0, 12.0],
        ),
    ]);
    let truth = engine().analyze(&dataset);

    assert_eq!(truth.group_differences.len(), 1);
    let finding = &truth.group_differences[0];
    assert_eq!(finding.test, GroupTest::Anova);
    assert_eq!(finding.direction, "c > a");
    assert!(finding.p_value < 0.01);
}

#[test]
fn test_direction_uses_all_categories_even_singletons() {
    // "extreme" has a single observation: dropped from the test, but it
    // still ranks highest for the rendered direction.
    let dataset = Dataset::new(vec![
        Column::categorical_complete(
            "group",
            vec!["low", "low", "low", "high", "high", "high", "extreme"],
        ),
        Column::numeric_complete("value", vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 100.0]),
    ]);
    let truth = engine().analyze(&dataset);

    assert_eq!(truth.group_differences.len(), 1);
    let finding = &truth.group_differences[0];
    // Only two usable groups, so the test is Welch's t.
    assert_eq!(finding.test, GroupTest::TTest);
    assert_eq!(finding.direction, "extreme > low");
    assert_eq!(finding.group_means.len(), 3);
}

#[test]
fn test_similar_groups_emit_no_difference() {
    let dataset = Dataset::new(vec![
        Column::categorical_complete("flag", vec!["a", "b", "a", "b", "a", "b"]),
        Column::numeric_complete("value", vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0]),
    ]);
    let truth = engine().analyze(&dataset);
    assert!(truth.group_differences.is_empty());
}

#[test]
fn test_aligned_categoricals_yield_association() {
    let labels: Vec<&str> = ["p", "q"].iter().cycle().take(40).copied().collect();
    let dataset = Dataset::new(vec![
        Column::categorical_complete("first", labels.clone()),
        Column::categorical_complete("second", labels),
    ]);
    let truth = engine().analyze(&dataset);

    assert_eq!(truth.categorical_associations.len(), 1);
    let finding = &truth.categorical_associations[0];
    assert_eq!(finding.var1, "first");
    assert_eq!(finding.var2, "second");
    assert!(finding.p_value < 0.001);
    assert!(finding.cramers_v > 0.8);
    assert_eq!(finding.strength, EffectStrength::Strong);
}

#[test]
fn test_independent_categoricals_emit_no_association() {
    let first: Vec<&str> = ["p", "q"].iter().cycle().take(40).copied().collect();
    let second: Vec<&str> = ["u", "u", "v", "v"].iter().cycle().take(40).copied().collect();
    let dataset = Dataset::new(vec![
        Column::categorical_complete("first", first),
        Column::categorical_complete("second", second),
    ]);
    let truth = engine().analyze(&dataset);
    assert!(truth.categorical_associations.is_empty());
}

#[test]
fn test_single_level_categorical_skipped() {
    let dataset = Dataset::new(vec![
        Column::categorical_complete("constant", vec!["only"; 10]),
        Column::categorical_complete(
            "varied",
            vec!["a", "b", "a", "b", "a", "b", "a", "b", "a", "b"],
        ),
    ]);
    let truth = engine().analyze(&dataset);
    assert!(truth.categorical_associations.is_empty());
}

#[test]
fn test_summary_covers_all_columns() {
    let dataset = Dataset::new(vec![
        Column::numeric_complete("age", (0..10).map(|i| 25.0 + 5.0 * i as f64).collect()),
        Column::categorical_complete("sex", vec!["m", "f", "m", "f", "m", "f", "m", "f", "m", "f"]),
    ]);
    let truth = engine().analyze(&dataset);

    let age = truth.summary.get("age").and_then(|s| s.as_numeric().cloned()).unwrap();
    assert_eq!(age.count, 10);
    assert_eq!(age.min, 25.0);
    assert_eq!(age.max, 70.0);
    assert!((age.mean - 47.5).abs() < 1e-12);

    let sex = truth.summary.get("sex").unwrap();
    assert_eq!(sex.count(), 10);
}

#[test]
fn test_analysis_is_deterministic() {
    let dataset = lockstep_dataset();
    let engine = engine();
    let first = serde_json::to_value(engine.analyze(&dataset)).unwrap();
    let second = serde_json::to_value(engine.analyze(&dataset)).unwrap();
    assert_eq!(first, second);
}
