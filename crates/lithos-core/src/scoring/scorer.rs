//! Match scoring.
//!
//! [`MatchScorer`] walks a strategy's factors in order for one catalog entry,
//! collecting earned weight and one reason per contributing factor.

use crate::catalog::{AffinityTables, CatalogEntry, Chakra, Mood, Scenario};
use crate::energy::EnergyState3D;
use crate::error::{EngineError, Result};
use crate::profile::PersonalProfile;
use crate::usage::usage_for;

use super::needs::{derive_needs, Need, SOOTHING_KEYWORDS};
use super::strategy::{Factor, Normalization, ScoringStrategy};

/// Reason used when no factor contributed.
pub const FALLBACK_REASON: &str = "A versatile stone for general well-being";

/// Context values resolved once per call, shared by every entry.
#[derive(Debug, Clone)]
pub struct ScoringInput<'a> {
    pub mood: Option<Mood>,
    pub energy_level: Option<u8>,
    /// Non-empty personality type code, if any
    pub personality: Option<&'a str>,
    pub chakra: Option<Chakra>,
    pub scenario: Option<Scenario>,
    pub needs: Vec<Need>,
    pub energy_state: &'a EnergyState3D,
}

impl<'a> ScoringInput<'a> {
    /// Resolve raw context fields against a strategy.
    ///
    /// An explicit energy level or chakra wins over what the profile implies.
    pub fn resolve(
        strategy: &ScoringStrategy,
        mood: Option<Mood>,
        profile: Option<&'a PersonalProfile>,
        energy_state: &'a EnergyState3D,
        scenario: Option<Scenario>,
        energy_level: Option<u8>,
        chakra: Option<Chakra>,
    ) -> Self {
        let energy_level = energy_level.or_else(|| profile.map(|p| p.preferred_energy_level));
        let personality = profile.map(PersonalProfile::type_code).filter(|p| !p.is_empty());
        let chakra = chakra.or_else(|| {
            let (weakest, value) = profile?.weakest_chakra()?;
            match strategy.chakra_deficit_threshold {
                Some(threshold) if value >= threshold => None,
                _ => Some(weakest),
            }
        });

        Self {
            mood,
            energy_level,
            personality,
            chakra,
            scenario,
            needs: derive_needs(energy_state, mood),
            energy_state,
        }
    }

    /// Usage focus: the scenario when given, else the primary need's.
    pub fn usage_focus(&self) -> Option<Scenario> {
        self.scenario
            .or_else(|| self.needs.first().map(Need::usage_focus))
    }
}

/// Scored entry ready for ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CatalogEntry,
    /// Match score (0-100)
    pub score: u8,
    /// Never empty
    pub reasons: Vec<String>,
    pub mood_matched: bool,
    pub usage: String,
}

/// Outcome of one factor for one entry.
#[derive(Debug, Clone, PartialEq)]
enum Evaluation {
    /// The context field behind this factor was not supplied
    NotApplicable,
    Missed,
    /// Fraction (0.0-1.0) of the factor's weight earned
    Earned { fraction: f64, reason: String },
}

/// Scores catalog entries under one strategy.
#[derive(Debug, Clone)]
pub struct MatchScorer<'a> {
    strategy: &'a ScoringStrategy,
    affinity: &'a AffinityTables,
}

impl<'a> MatchScorer<'a> {
    pub fn new(strategy: &'a ScoringStrategy, affinity: &'a AffinityTables) -> Self {
        Self { strategy, affinity }
    }

    /// Score one entry. Fails only if the arithmetic produced a non-finite value.
    pub fn score<'e>(
        &self,
        entry: &'e CatalogEntry,
        input: &ScoringInput<'_>,
    ) -> Result<ScoredEntry<'e>> {
        let mut possible = 0.0;
        let mut earned = 0.0;
        let mut reasons = Vec::new();
        let mut mood_matched = false;

        for fw in &self.strategy.factors {
            match self.evaluate(fw.factor, entry, input) {
                Evaluation::NotApplicable => {}
                Evaluation::Missed => possible += fw.weight,
                Evaluation::Earned { fraction, reason } => {
                    possible += fw.weight;
                    earned += fw.weight * fraction;
                    reasons.push(reason);
                    if fw.factor == Factor::Mood {
                        mood_matched = true;
                    }
                }
            }
        }

        let raw = match self.strategy.normalization {
            Normalization::ApplicableCriteria if possible > 0.0 => earned / possible * 100.0,
            Normalization::ApplicableCriteria => f64::from(entry.base_score),
            Normalization::Absolute => earned,
        };
        if !raw.is_finite() {
            return Err(EngineError::Internal(format!(
                "non-finite score {raw} for '{}'",
                entry.id
            )));
        }
        let score = raw.round().clamp(0.0, 100.0) as u8;

        if reasons.is_empty() {
            reasons.push(FALLBACK_REASON.to_string());
        }

        Ok(ScoredEntry {
            entry,
            score,
            reasons,
            mood_matched,
            usage: usage_for(
                &entry.usage_template,
                input.energy_state.time_bucket,
                input.usage_focus(),
            ),
        })
    }

    fn evaluate(
        &self,
        factor: Factor,
        entry: &CatalogEntry,
        input: &ScoringInput<'_>,
    ) -> Evaluation {
        match factor {
            Factor::Mood => match input.mood {
                None => Evaluation::NotApplicable,
                Some(mood) if entry.suits_mood(mood) => {
                    earned(format!("Helps when you feel {mood}"))
                }
                Some(_) => Evaluation::Missed,
            },
            Factor::Needs => {
                if input.needs.is_empty() {
                    return Evaluation::NotApplicable;
                }
                match input.needs.iter().find(|need| need.matches(entry)) {
                    Some(need) => earned(format!("Supports your need for {}", need.label())),
                    None => Evaluation::Missed,
                }
            }
            Factor::Personality => match input.personality {
                None => Evaluation::NotApplicable,
                Some(personality) => {
                    let shared = entry.shared_personality_axes(personality);
                    if shared.is_empty() {
                        Evaluation::Missed
                    } else {
                        let letters: String = shared.into_iter().collect();
                        earned(format!("Resonates with your {letters} personality traits"))
                    }
                }
            },
            Factor::EnergyLevel => match input.energy_level {
                None => Evaluation::NotApplicable,
                Some(level) if entry.suits_energy_level(level) => {
                    earned(format!("Suits energy level {level}"))
                }
                Some(_) => Evaluation::Missed,
            },
            Factor::Chakra => match input.chakra {
                None => Evaluation::NotApplicable,
                Some(chakra) if chakra == entry.chakra => {
                    if self.strategy.chakra_deficit_threshold.is_some() {
                        earned(format!("Strengthens your depleted {chakra} chakra"))
                    } else {
                        earned(format!("Aligned with your {chakra} chakra"))
                    }
                }
                Some(_) => Evaluation::Missed,
            },
            Factor::Scenario => match input.scenario {
                None => Evaluation::NotApplicable,
                Some(scenario) => match entry.scenario_points(scenario) {
                    0 => Evaluation::Missed,
                    points => {
                        let weight = self.strategy.weight_of(Factor::Scenario).unwrap_or(5.0);
                        Evaluation::Earned {
                            fraction: (f64::from(points) / weight).min(1.0),
                            reason: format!("Well suited to {scenario} use"),
                        }
                    }
                },
            },
            Factor::TimeOfDay => {
                let bucket = input.energy_state.time_bucket;
                if self.affinity.prefers_in_bucket(bucket, &entry.id) {
                    earned(format!("Especially effective in the {}", bucket.name()))
                } else {
                    Evaluation::Missed
                }
            }
            Factor::Trend => {
                let trend = input.energy_state.trend;
                if self.affinity.prefers_in_trend(trend, &entry.id) {
                    earned(format!("Fits your {} energy", trend.name()))
                } else {
                    Evaluation::Missed
                }
            }
            Factor::Urgency => match input.mood {
                Some(mood) if mood.is_acute() => {
                    if entry.has_effect_keyword(SOOTHING_KEYWORDS) {
                        earned(format!("Immediate soothing support while {mood}"))
                    } else {
                        Evaluation::Missed
                    }
                }
                _ => Evaluation::NotApplicable,
            },
        }
    }
}

fn earned(reason: String) -> Evaluation {
    Evaluation::Earned {
        fraction: 1.0,
        reason,
    }
}
