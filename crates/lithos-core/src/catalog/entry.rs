//! Catalog entry types.

use serde::{Deserialize, Serialize};

use super::tags::{Chakra, Element, EvidenceLevel, Mood, Scenario};

/// Presentation attributes. Scoring never reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayAttributes {
    pub name: String,
    pub color: String,
    pub category: String,
}

/// Bonus points an entry earns for a usage scenario (basic mode).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBonus {
    pub scenario: Scenario,
    pub points: u8,
}

/// One recommendable stone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(flatten)]
    pub display: DisplayAttributes,
    pub chakra: Chakra,
    pub element: Element,
    /// Energy intensities (1-5) this stone suits
    pub energy_levels: Vec<u8>,
    #[serde(rename = "emotions")]
    pub emotion_tags: Vec<Mood>,
    /// Single-letter personality axis codes, e.g. 'E', 'N'
    #[serde(rename = "personality")]
    pub personality_tags: Vec<char>,
    /// Short effect phrases, used for need matching
    #[serde(rename = "effects")]
    pub effect_tags: Vec<String>,
    #[serde(rename = "usage")]
    pub usage_template: String,
    #[serde(rename = "evidence")]
    pub evidence_level: EvidenceLevel,
    /// Fallback score when no context criteria apply
    pub base_score: u8,
    #[serde(default)]
    pub scenario_bonus: Vec<ScenarioBonus>,
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        &self.display.name
    }

    pub fn suits_mood(&self, mood: Mood) -> bool {
        self.emotion_tags.contains(&mood)
    }

    pub fn suits_energy_level(&self, level: u8) -> bool {
        self.energy_levels.contains(&level)
    }

    /// Personality letters shared with `personality_type`, in the caller's order.
    ///
    /// Comparison is case-insensitive.
    pub fn shared_personality_axes(&self, personality_type: &str) -> Vec<char> {
        let mut shared = Vec::new();
        for letter in personality_type.chars().map(|c| c.to_ascii_uppercase()) {
            let hit = self
                .personality_tags
                .iter()
                .any(|tag| tag.to_ascii_uppercase() == letter);
            if hit && !shared.contains(&letter) {
                shared.push(letter);
            }
        }
        shared
    }

    /// Bonus points for `scenario`, zero when the entry has none.
    pub fn scenario_points(&self, scenario: Scenario) -> u8 {
        self.scenario_bonus
            .iter()
            .find(|b| b.scenario == scenario)
            .map(|b| b.points)
            .unwrap_or(0)
    }

    /// Whether any effect phrase contains one of `keywords` (case-insensitive).
    pub fn has_effect_keyword(&self, keywords: &[&str]) -> bool {
        self.effect_tags.iter().any(|effect| {
            let effect = effect.to_lowercase();
            keywords.iter().any(|k| effect.contains(k))
        })
    }
}
