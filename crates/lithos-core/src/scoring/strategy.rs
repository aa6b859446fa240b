//! Scoring strategies.
//!
//! A strategy is an ordered list of weighted factors plus the rules that turn
//! earned weight into a 0-100 score and a confidence label. The two named
//! presets reproduce basic and intelligent mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One scoring criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// Context mood is one of the entry's emotion tags
    Mood,
    /// An inferred need matches one of the entry's effect tags
    Needs,
    /// Personality axis letters overlap
    Personality,
    /// Energy level is one the entry suits
    EnergyLevel,
    /// Context chakra equals the entry's chakra
    Chakra,
    /// Per-entry scenario bonus
    Scenario,
    /// Entry is preferred for the current time bucket
    TimeOfDay,
    /// Entry is preferred for the current energy trend
    Trend,
    /// Acute mood and the entry soothes
    Urgency,
}

/// A factor and the weight it carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeight {
    pub factor: Factor,
    pub weight: f64,
}

impl FactorWeight {
    pub fn new(factor: Factor, weight: f64) -> Self {
        Self { factor, weight }
    }
}

/// How earned weight becomes a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Percentage of the weights whose context field was supplied.
    /// With nothing supplied the entry keeps its base score.
    ApplicableCriteria,
    /// Sum of earned weight, clamped to 0-100.
    Absolute,
}

/// How a ranked score becomes a confidence label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceRule {
    /// high: score >= 80 and high evidence; medium: score >= 60 and evidence not low
    EvidenceWeighted,
    /// high: score > 80 or mood matched; low: score < 50; medium otherwise
    ScoreWithMoodFloor,
}

/// Named strategy presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Basic,
    Intelligent,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Basic => "basic",
            StrategyKind::Intelligent => "intelligent",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(StrategyKind::Basic),
            "intelligent" => Ok(StrategyKind::Intelligent),
            _ => Err(format!("unknown strategy: '{s}'")),
        }
    }
}

/// Complete scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringStrategy {
    pub kind: StrategyKind,
    /// Factors in evaluation order; reasons follow this order
    pub factors: Vec<FactorWeight>,
    pub normalization: Normalization,
    /// When set, only a profile chakra scoring below this counts as the context chakra
    pub chakra_deficit_threshold: Option<u8>,
    pub confidence: ConfidenceRule,
    pub default_max_recommendations: usize,
}

impl ScoringStrategy {
    /// Basic mode: renormalized over supplied criteria.
    pub fn basic() -> Self {
        Self {
            kind: StrategyKind::Basic,
            factors: vec![
                FactorWeight::new(Factor::Mood, 40.0),
                FactorWeight::new(Factor::EnergyLevel, 25.0),
                FactorWeight::new(Factor::Personality, 20.0),
                FactorWeight::new(Factor::Chakra, 10.0),
                FactorWeight::new(Factor::Scenario, 5.0),
            ],
            normalization: Normalization::ApplicableCriteria,
            chakra_deficit_threshold: None,
            confidence: ConfidenceRule::EvidenceWeighted,
            default_max_recommendations: 3,
        }
    }

    /// Intelligent mode: fixed absolute weights plus an urgency bonus.
    ///
    /// Chakra carries two thirds of its nominal 10 and the two affinity
    /// factors half of theirs.
    pub fn intelligent() -> Self {
        Self {
            kind: StrategyKind::Intelligent,
            factors: vec![
                FactorWeight::new(Factor::Mood, 30.0),
                FactorWeight::new(Factor::Needs, 25.0),
                FactorWeight::new(Factor::Personality, 20.0),
                FactorWeight::new(Factor::EnergyLevel, 15.0),
                FactorWeight::new(Factor::Chakra, 10.0 * 2.0 / 3.0),
                FactorWeight::new(Factor::TimeOfDay, 10.0 * 0.5),
                FactorWeight::new(Factor::Trend, 10.0 * 0.5),
                FactorWeight::new(Factor::Urgency, 10.0),
            ],
            normalization: Normalization::Absolute,
            chakra_deficit_threshold: Some(40),
            confidence: ConfidenceRule::ScoreWithMoodFloor,
            default_max_recommendations: 4,
        }
    }

    pub fn preset(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Basic => Self::basic(),
            StrategyKind::Intelligent => Self::intelligent(),
        }
    }

    pub fn weight_of(&self, factor: Factor) -> Option<f64> {
        self.factors
            .iter()
            .find(|fw| fw.factor == factor)
            .map(|fw| fw.weight)
    }

    /// Validate that all weights are finite and non-negative, and no factor repeats.
    pub fn validate(&self) -> Result<(), String> {
        for (i, fw) in self.factors.iter().enumerate() {
            if !fw.weight.is_finite() || fw.weight < 0.0 {
                return Err(format!(
                    "{:?} weight must be a non-negative number, got {}",
                    fw.factor, fw.weight
                ));
            }
            if self.factors[..i].iter().any(|prev| prev.factor == fw.factor) {
                return Err(format!("{:?} appears more than once", fw.factor));
            }
        }
        Ok(())
    }
}

impl Default for ScoringStrategy {
    fn default() -> Self {
        Self::basic()
    }
}
