//! Numbered-list claim extraction with ordered keyword rule tables.

use regex::Regex;
use tracing::{debug, info};

use super::types::{Claim, ClaimDirection, ClaimStrength};

type Predicate = fn(&str) -> bool;

/// Direction rules, evaluated in order against the lowercased claim text;
/// the first matching predicate wins.
const DIRECTION_RULES: &[(Predicate, ClaimDirection)] = &[
    (
        |text| text.contains("positive") || (text.contains("increases") && !text.contains("decreases")),
        ClaimDirection::Positive,
    ),
    (
        |text| text.contains("negative") || text.contains("decreases"),
        ClaimDirection::Negative,
    ),
];

/// Strength rules with their confidence scores, first match wins.
/// "significant" counts as strong, so "strong" outranks "moderate" and
/// "weak" outranks "moderate" when both appear.
const STRENGTH_RULES: &[(Predicate, ClaimStrength, f64)] = &[
    (
        |text| text.contains("strong") || text.contains("significant"),
        ClaimStrength::Strong,
        0.8,
    ),
    (|text| text.contains("weak"), ClaimStrength::Weak, 0.4),
    (|text| text.contains("moderate"), ClaimStrength::Moderate, 0.6),
];

/// First direction rule matching the lowercased text, default `Unknown`.
pub fn classify_direction(lowercase_text: &str) -> ClaimDirection {
    DIRECTION_RULES
        .iter()
        .find(|(predicate, _)| predicate(lowercase_text))
        .map(|(_, direction)| *direction)
        .unwrap_or(ClaimDirection::Unknown)
}

/// First strength rule matching the lowercased text, default
/// `(Unknown, 0.5)`.
pub fn classify_strength(lowercase_text: &str) -> (ClaimStrength, f64) {
    STRENGTH_RULES
        .iter()
        .find(|(predicate, _, _)| predicate(lowercase_text))
        .map(|(_, strength, confidence)| (*strength, *confidence))
        .unwrap_or((ClaimStrength::Unknown, 0.5))
}

/// Extracts candidate claims from free-text model output.
///
/// A line qualifies only if it begins with a numbered-list marker
/// (`1.` or `1)`); everything else is silently discarded.
#[derive(Debug)]
pub struct ClaimParser {
    marker: Regex,
}

impl Default for ClaimParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimParser {
    pub fn new() -> Self {
        Self { marker: Regex::new(r"^\d+[.)]\s*").expect("valid list-marker regex") }
    }

    /// Parse raw model output into structured claims. Empty input yields
    /// an empty list, never an error.
    pub fn parse(&self, raw: &str) -> Vec<Claim> {
        if raw.trim().is_empty() {
            debug!("empty model output, no claims extracted");
            return Vec::new();
        }

        let mut claims = Vec::new();
        for line in raw.lines() {
            let line = line.trim();
            let Some(marker) = self.marker.find(line) else {
                continue;
            };

            let text = &line[marker.end()..];
            let lowered = text.to_lowercase();
            let (strength, confidence_score) = classify_strength(&lowered);

            claims.push(Claim {
                direction: classify_direction(&lowered),
                strength,
                confidence_score,
                ..Claim::new(text)
            });
        }

        info!(claims = claims.len(), "extracted potential insights");
        claims
    }
}
