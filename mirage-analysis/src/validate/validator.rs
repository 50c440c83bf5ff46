//! The per-claim validation ladder.

use mirage_core::config::ValidationConfig;
use regex::Regex;
use tracing::{debug, info};

use crate::claims::Claim;
use crate::truth::{ColumnSummary, GroundTruth, NumericSummary};

use super::matching;
use super::types::{ValidationVerdict, VerdictStatus};

const CENTRAL_KEYWORDS: &[&str] = &["mean", "average", "centered around", "typical"];
const SPREAD_KEYWORDS: &[&str] =
    &["range", "vary", "variability", "outlier", "minimum", "maximum"];
const MEDIAN_KEYWORDS: &[&str] = &["median", "50%", "middle"];

/// Validates parsed claims against the ground-truth catalogue.
///
/// Branches are evaluated in priority order: metadata (sample size),
/// single-variable descriptive statistics, then two-variable relationship
/// lookup. The first branch that concludes determines the verdict.
#[derive(Debug)]
pub struct ClaimValidator {
    config: ValidationConfig,
    number_re: Regex,
}

impl ClaimValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config, number_re: Regex::new(r"[-+]?\d*\.\d+|\d+").expect("valid number regex") }
    }

    /// One verdict per claim, order-preserving.
    pub fn validate(
        &self,
        claims: &[Claim],
        truth: &GroundTruth,
        columns: &[String],
    ) -> Vec<ValidationVerdict> {
        info!(claims = claims.len(), "validating claims");
        claims.iter().map(|claim| self.validate_claim(claim, truth, columns)).collect()
    }

    fn validate_claim(
        &self,
        claim: &Claim,
        truth: &GroundTruth,
        columns: &[String],
    ) -> ValidationVerdict {
        let text = &claim.original_text;
        let threshold = self.config.effective_match_threshold() * 100.0;
        let extracted = matching::resolve_variables(text, columns, threshold);
        debug!(claim = %text, vars = ?extracted.as_slice(), "resolved claim variables");

        let mut verdict = ValidationVerdict {
            claim: claim.clone(),
            extracted_vars: extracted.to_vec(),
            status: VerdictStatus::Unverified,
            reason: "Not enough variables found".to_string(),
            ground_truth: None,
        };

        let lowered = text.to_lowercase();

        // Metadata claims outrank relationship checks.
        if lowered.contains("sample size") || lowered.contains("n=") {
            self.check_sample_size(text, truth, &mut verdict);
            return verdict;
        }

        if verdict.extracted_vars.len() == 1 {
            let variable = verdict.extracted_vars[0].clone();
            self.check_descriptive_stats(text, &lowered, &variable, truth, &mut verdict);
            return verdict;
        }

        if verdict.extracted_vars.len() < 2 {
            return verdict;
        }

        let var1 = verdict.extracted_vars[0].clone();
        let var2 = verdict.extracted_vars[1].clone();
        match truth.find_relationship(&var1, &var2) {
            None => {
                verdict.status = VerdictStatus::HallucinationRelationship;
                verdict.reason =
                    format!("No statistical relationship found between {var1} and {var2}");
            }
            Some(finding) => {
                let true_direction = finding.direction_label();
                if claim.direction.is_explicit() && claim.direction.name() != true_direction {
                    verdict.status = VerdictStatus::HallucinationDirection;
                    verdict.reason =
                        format!("Claimed {}, but actually {}", claim.direction, true_direction);
                } else {
                    verdict.status = VerdictStatus::Valid;
                    verdict.reason = "Relationship confirmed by statistics".to_string();
                }
                verdict.ground_truth = Some(finding);
            }
        }
        verdict
    }

    /// Sample-size claims: any extracted number within absolute tolerance
    /// of the first summarized column's count passes. A claim with no
    /// numbers keeps the default verdict.
    fn check_sample_size(
        &self,
        text: &str,
        truth: &GroundTruth,
        verdict: &mut ValidationVerdict,
    ) {
        let numbers = self.extract_numbers(text);
        if numbers.is_empty() {
            return;
        }

        if let Some(profile) = truth.summary.first() {
            let count = profile.summary.count() as f64;
            let tolerance = self.config.effective_sample_size_tolerance();
            for value in numbers {
                if (value - count).abs() < tolerance {
                    verdict.status = VerdictStatus::Valid;
                    verdict.reason =
                        format!("Valid sample size (approx {})", value.trunc() as i64);
                    return;
                }
            }
        }

        verdict.status = VerdictStatus::Unverified;
        verdict.reason = "Could not verify sample size against ground truth".to_string();
    }

    /// Descriptive-statistic categories, tried in order: central tendency,
    /// range/spread, median. A category only concludes on a number match;
    /// otherwise the next category is tried and the verdict may fall
    /// through unchanged.
    fn check_descriptive_stats(
        &self,
        text: &str,
        lowered: &str,
        variable: &str,
        truth: &GroundTruth,
        verdict: &mut ValidationVerdict,
    ) {
        let Some(stats) = truth.summary.get(variable).and_then(ColumnSummary::as_numeric)
        else {
            return;
        };
        let numbers = self.extract_numbers(text);

        if contains_any(lowered, CENTRAL_KEYWORDS) {
            for &num in &numbers {
                if self.within_tolerance(num, stats.mean) {
                    verdict.status = VerdictStatus::Valid;
                    verdict.reason = format!("Mean/Center of {variable} is approx {num}");
                    return;
                }
            }
        }

        if contains_any(lowered, SPREAD_KEYWORDS)
            && self.check_spread(lowered, variable, stats, &numbers, verdict)
        {
            return;
        }

        if contains_any(lowered, MEDIAN_KEYWORDS) {
            for &num in &numbers {
                if self.within_tolerance(num, stats.median) {
                    verdict.status = VerdictStatus::Valid;
                    verdict.reason = format!("Median {variable} verified");
                    return;
                }
            }
        }
    }

    /// Min/max matches with an explicit "outlier"/"minimum"/"maximum"
    /// keyword short-circuit; any other min-or-max hit verifies the range
    /// generically; standard deviation is the last resort.
    fn check_spread(
        &self,
        lowered: &str,
        variable: &str,
        stats: &NumericSummary,
        numbers: &[f64],
        verdict: &mut ValidationVerdict,
    ) -> bool {
        let mut matched_range = false;

        for &num in numbers {
            if self.within_tolerance(num, stats.min) {
                matched_range = true;
                if lowered.contains("outlier") || lowered.contains("minimum") {
                    verdict.status = VerdictStatus::Valid;
                    verdict.reason = format!("Minimum/Outlier {num} for {variable} verified");
                    return true;
                }
            }
            if self.within_tolerance(num, stats.max) {
                matched_range = true;
                if lowered.contains("outlier") || lowered.contains("maximum") {
                    verdict.status = VerdictStatus::Valid;
                    verdict.reason = format!("Maximum/Outlier {num} for {variable} verified");
                    return true;
                }
            }
        }

        if matched_range {
            verdict.status = VerdictStatus::Valid;
            verdict.reason = format!("Range/Limits for {variable} verified");
            return true;
        }

        for &num in numbers {
            if self.within_tolerance(num, stats.std) {
                verdict.status = VerdictStatus::Valid;
                verdict.reason = format!("Standard deviation for {variable} verified");
                return true;
            }
        }
        false
    }

    fn extract_numbers(&self, text: &str) -> Vec<f64> {
        self.number_re
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .collect()
    }

    fn within_tolerance(&self, claimed: f64, actual: f64) -> bool {
        actual.is_finite()
            && (claimed - actual).abs() / (actual.abs() + 1e-3)
                < self.config.effective_relative_tolerance()
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
