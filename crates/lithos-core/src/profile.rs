//! Personal profile derived from upstream free-text descriptions.
//!
//! [`parse_profile`] is a best-effort adapter: it turns a personality type
//! string plus two prose narratives into a small structured profile using
//! keyword heuristics. Every branch has a default, so parsing never fails.
//!
//! Chakra scores that cannot be read from the narrative are recorded as
//! [`ChakraScore::Unknown`]; scoring treats unknown chakras as
//! non-contributing instead of inventing a value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Chakra;

/// Characters scanned after a chakra name when looking for its score.
const SCORE_WINDOW: usize = 24;

const CLAUSE_DELIMITERS: &[char] = &[',', '.', ';', '\n'];

/// Deficiency score for one chakra (lower = more deficient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "value")]
pub enum ChakraScore {
    Known(u8),
    Unknown,
}

impl ChakraScore {
    pub fn value(&self) -> Option<u8> {
        match self {
            ChakraScore::Known(v) => Some(*v),
            ChakraScore::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalPattern {
    Sensitive,
    Rational,
    Balanced,
    Adaptive,
}

impl EmotionalPattern {
    pub fn name(&self) -> &'static str {
        match self {
            EmotionalPattern::Sensitive => "sensitive",
            EmotionalPattern::Rational => "rational",
            EmotionalPattern::Balanced => "balanced",
            EmotionalPattern::Adaptive => "adaptive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyArchetype {
    Leader,
    Creator,
    Healer,
    Sage,
    Explorer,
}

impl EnergyArchetype {
    pub fn name(&self) -> &'static str {
        match self {
            EnergyArchetype::Leader => "leader",
            EnergyArchetype::Creator => "creator",
            EnergyArchetype::Healer => "healer",
            EnergyArchetype::Sage => "sage",
            EnergyArchetype::Explorer => "explorer",
        }
    }
}

/// Structured profile consumed by the estimator and the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
    /// Axis letters, e.g. "INFJ"
    pub personality_type: String,
    pub chakra_balance: BTreeMap<Chakra, ChakraScore>,
    pub emotional_pattern: EmotionalPattern,
    pub energy_archetype: EnergyArchetype,
    /// Preferred energy intensity (1-5)
    pub preferred_energy_level: u8,
}

impl PersonalProfile {
    /// Whether the personality type carries `axis` (case-insensitive).
    pub fn has_axis(&self, axis: char) -> bool {
        has_axis(&self.personality_type, axis)
    }

    /// The axis letters of the personality type, without suffixes such as "-T".
    pub fn type_code(&self) -> &str {
        type_code(&self.personality_type)
    }

    /// The chakra with the lowest known score. Ties go to the chakra nearer the root.
    pub fn weakest_chakra(&self) -> Option<(Chakra, u8)> {
        self.chakra_balance
            .iter()
            .filter_map(|(chakra, score)| score.value().map(|v| (*chakra, v)))
            .min_by_key(|(_, v)| *v)
    }
}

impl Default for PersonalProfile {
    fn default() -> Self {
        Self {
            personality_type: String::new(),
            chakra_balance: Chakra::ALL.into_iter().map(|c| (c, ChakraScore::Unknown)).collect(),
            emotional_pattern: EmotionalPattern::Adaptive,
            energy_archetype: EnergyArchetype::Explorer,
            preferred_energy_level: 3,
        }
    }
}

/// Build a [`PersonalProfile`] from the three upstream text fields.
///
/// Any field may be absent.
pub fn parse_profile(
    personality_type: Option<&str>,
    chakra_narrative: Option<&str>,
    insight_narrative: Option<&str>,
) -> PersonalProfile {
    let personality_type = personality_type.map(str::trim).unwrap_or_default().to_string();
    let chakra_balance = parse_chakra_balance(chakra_narrative.unwrap_or_default());
    if chakra_narrative.is_some() && chakra_balance.values().all(|s| *s == ChakraScore::Unknown) {
        tracing::warn!("chakra narrative carried no readable scores");
    }

    let insight = insight_narrative.unwrap_or_default().to_lowercase();

    PersonalProfile {
        preferred_energy_level: preferred_energy_level(&personality_type),
        personality_type,
        chakra_balance,
        emotional_pattern: emotional_pattern(&insight),
        energy_archetype: energy_archetype(&insight),
    }
}

/// Leading run of ASCII letters, e.g. "INFJ" for "INFJ-T".
fn type_code(personality_type: &str) -> &str {
    let end = personality_type
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(personality_type.len());
    &personality_type[..end]
}

fn has_axis(personality_type: &str, axis: char) -> bool {
    type_code(personality_type)
        .chars()
        .any(|c| c.eq_ignore_ascii_case(&axis))
}

/// First matching keyword group wins.
fn emotional_pattern(insight: &str) -> EmotionalPattern {
    const RULES: [(EmotionalPattern, &[&str]); 3] = [
        (EmotionalPattern::Sensitive, &["rich", "sensitiv", "empath", "deep feeling"]),
        (EmotionalPattern::Rational, &["logic", "reason", "rational", "analytic"]),
        (EmotionalPattern::Balanced, &["balance", "stable", "stability", "steady"]),
    ];
    first_match(insight, &RULES).unwrap_or(EmotionalPattern::Adaptive)
}

fn energy_archetype(insight: &str) -> EnergyArchetype {
    const RULES: [(EnergyArchetype, &[&str]); 4] = [
        (EnergyArchetype::Leader, &["leader", "leadership", "lead ", "command"]),
        (EnergyArchetype::Creator, &["creat", "artist", "innovat", "imaginat"]),
        (EnergyArchetype::Healer, &["heal", "nurtur", "caring", "compassion"]),
        (EnergyArchetype::Sage, &["wisdom", "wise", "sage", "philosoph"]),
    ];
    first_match(insight, &RULES).unwrap_or(EnergyArchetype::Explorer)
}

fn first_match<T: Copy>(text: &str, rules: &[(T, &[&str])]) -> Option<T> {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(value, _)| *value)
}

fn preferred_energy_level(personality_type: &str) -> u8 {
    let e = has_axis(personality_type, 'E');
    let i = has_axis(personality_type, 'I');
    let s = has_axis(personality_type, 'S');
    let n = has_axis(personality_type, 'N');

    match (e, i) {
        (true, _) if s => 4,
        (_, true) if n => 2,
        (true, _) => 3,
        (_, true) => 2,
        _ => 3,
    }
}

fn parse_chakra_balance(narrative: &str) -> BTreeMap<Chakra, ChakraScore> {
    let lower = narrative.to_lowercase();
    Chakra::ALL
        .into_iter()
        .map(|chakra| (chakra, score_for(&lower, chakra)))
        .collect()
}

/// Find the first alias occurrence followed by a 0-100 number within the window.
fn score_for(narrative: &str, chakra: Chakra) -> ChakraScore {
    for alias in chakra.aliases() {
        for (pos, _) in narrative.match_indices(alias) {
            let window = score_window(&narrative[pos + alias.len()..]);
            if let Some(value) = first_number(window) {
                if value <= 100 {
                    return ChakraScore::Known(value as u8);
                }
            }
        }
    }
    ChakraScore::Unknown
}

/// Text after a chakra name that may hold its score: at most [`SCORE_WINDOW`]
/// characters, ending early at a clause delimiter or the next chakra name.
fn score_window(tail: &str) -> &str {
    let mut end = tail
        .char_indices()
        .nth(SCORE_WINDOW)
        .map_or(tail.len(), |(i, _)| i);
    if let Some(i) = tail[..end].find(CLAUSE_DELIMITERS) {
        end = i;
    }
    let next_chakra = Chakra::ALL
        .iter()
        .flat_map(|c| c.aliases())
        .filter_map(|alias| tail[..end].find(alias))
        .min();
    if let Some(i) = next_chakra {
        end = i;
    }
    &tail[..end]
}

fn first_number(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
