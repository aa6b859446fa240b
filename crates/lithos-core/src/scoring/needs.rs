//! Need inference and need-to-effect keyword matching.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, Mood, Scenario};
use crate::energy::EnergyState3D;

/// Effect phrases that count as calming for the urgency bonus.
pub const SOOTHING_KEYWORDS: &[&str] = &["calm", "sooth", "peace", "relax", "stress relief"];

/// Something the user's current state calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Need {
    PhysicalBoost,
    Grounding,
    MentalClarity,
    Calming,
    SpiritualConnection,
    EnergyBalance,
    StressRelief,
    EmotionalHealing,
    Joy,
    Motivation,
    Protection,
}

impl Need {
    pub fn label(&self) -> &'static str {
        match self {
            Need::PhysicalBoost => "physical energy",
            Need::Grounding => "grounding",
            Need::MentalClarity => "mental clarity",
            Need::Calming => "calm",
            Need::SpiritualConnection => "spiritual connection",
            Need::EnergyBalance => "energy balance",
            Need::StressRelief => "stress relief",
            Need::EmotionalHealing => "emotional healing",
            Need::Joy => "joy",
            Need::Motivation => "motivation",
            Need::Protection => "protection",
        }
    }

    /// Substrings of an effect phrase that satisfy this need.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Need::PhysicalBoost => &["energy", "vitality", "boost"],
            Need::Grounding => &["grounding", "stability"],
            Need::MentalClarity => &["clarity", "focus", "concentration"],
            Need::Calming => &["calm", "sooth", "peace", "relax"],
            Need::SpiritualConnection => &["spiritual", "intuition", "meditation"],
            Need::EnergyBalance => &["balance", "harmony"],
            Need::StressRelief => &["stress", "calm", "relax"],
            Need::EmotionalHealing => &["emotional", "healing", "love", "compassion"],
            Need::Joy => &["joy", "happiness", "optimism"],
            Need::Motivation => &["motivation", "confidence", "courage"],
            Need::Protection => &["protection", "shield"],
        }
    }

    /// Usage scenario whose instructions best serve this need.
    pub fn usage_focus(&self) -> Scenario {
        match self {
            Need::Calming
            | Need::StressRelief
            | Need::MentalClarity
            | Need::SpiritualConnection => Scenario::Meditation,
            Need::PhysicalBoost | Need::EnergyBalance | Need::EmotionalHealing => Scenario::Healing,
            Need::Grounding | Need::Protection => Scenario::Protection,
            Need::Joy | Need::Motivation => Scenario::Daily,
        }
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        entry.has_effect_keyword(self.keywords())
    }
}

fn mood_needs(mood: Mood) -> &'static [Need] {
    match mood {
        Mood::Stressed => &[Need::StressRelief, Need::Calming, Need::Grounding],
        Mood::Anxious => &[Need::Calming, Need::Grounding, Need::Protection],
        Mood::Sad => &[Need::EmotionalHealing, Need::Joy],
        Mood::Tired => &[Need::PhysicalBoost, Need::Motivation],
        Mood::Angry => &[Need::Calming, Need::EmotionalHealing],
        Mood::Confused => &[Need::MentalClarity],
        Mood::Lonely => &[Need::EmotionalHealing],
        Mood::Unmotivated => &[Need::Motivation, Need::PhysicalBoost],
        Mood::Happy => &[Need::Joy],
    }
}

/// Needs implied by the energy state, then by the mood. Duplicates keep their first position.
pub fn derive_needs(state: &EnergyState3D, mood: Option<Mood>) -> Vec<Need> {
    let mut needs = Vec::new();
    let mut push = |need: Need| {
        if !needs.contains(&need) {
            needs.push(need);
        }
    };

    if state.physical < 40 {
        push(Need::PhysicalBoost);
    }
    if state.physical > 80 {
        push(Need::Grounding);
    }
    if state.mental < 40 {
        push(Need::MentalClarity);
    }
    if state.mental > 80 {
        push(Need::Calming);
    }
    if state.spiritual < 40 {
        push(Need::SpiritualConnection);
    }
    if state.balance < 50.0 {
        push(Need::EnergyBalance);
    }

    if let Some(mood) = mood {
        for need in mood_needs(mood) {
            push(*need);
        }
    }

    needs
}
