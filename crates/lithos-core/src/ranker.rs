//! Ranking and confidence labelling.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, EvidenceLevel};
use crate::scoring::{ConfidenceRule, ScoredEntry};

/// The engine's certainty about one recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn name(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Label a score under `rule`.
    pub fn assess(
        rule: ConfidenceRule,
        score: u8,
        entry: &CatalogEntry,
        mood_matched: bool,
    ) -> Self {
        match rule {
            ConfidenceRule::EvidenceWeighted => {
                if score >= 80 && entry.evidence_level == EvidenceLevel::High {
                    Confidence::High
                } else if score >= 60 && entry.evidence_level != EvidenceLevel::Low {
                    Confidence::Medium
                } else {
                    Confidence::Low
                }
            }
            ConfidenceRule::ScoreWithMoodFloor => {
                if score > 80 || mood_matched {
                    Confidence::High
                } else if score < 50 {
                    Confidence::Low
                } else {
                    Confidence::Medium
                }
            }
        }
    }
}

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub entry_id: String,
    pub name: String,
    /// Match score (0-100)
    pub match_score: u8,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
    /// Usage instructions adapted to the context
    pub usage: String,
}

/// Sort descending by score, keep the first `max`, and label confidence.
///
/// Ties keep catalog order.
pub fn rank(
    mut scored: Vec<ScoredEntry<'_>>,
    max: usize,
    rule: ConfidenceRule,
) -> Vec<RecommendationResult> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
        .into_iter()
        .take(max)
        .map(|s| RecommendationResult {
            entry_id: s.entry.id.clone(),
            name: s.entry.name().to_string(),
            match_score: s.score,
            confidence: Confidence::assess(rule, s.score, s.entry, s.mood_matched),
            reasons: s.reasons,
            usage: s.usage,
        })
        .collect()
}
