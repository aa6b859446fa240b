//! Closed tag vocabularies shared by catalog entries, profiles and contexts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chakra tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chakra {
    Root,
    Sacral,
    SolarPlexus,
    Heart,
    Throat,
    ThirdEye,
    Crown,
}

impl Chakra {
    /// All chakras, root to crown.
    pub const ALL: [Chakra; 7] = [
        Chakra::Root,
        Chakra::Sacral,
        Chakra::SolarPlexus,
        Chakra::Heart,
        Chakra::Throat,
        Chakra::ThirdEye,
        Chakra::Crown,
    ];

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Chakra::Root => "root",
            Chakra::Sacral => "sacral",
            Chakra::SolarPlexus => "solar plexus",
            Chakra::Heart => "heart",
            Chakra::Throat => "throat",
            Chakra::ThirdEye => "third eye",
            Chakra::Crown => "crown",
        }
    }

    /// Words that identify this chakra in free text (lowercase).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Chakra::Root => &["root", "muladhara"],
            Chakra::Sacral => &["sacral", "svadhisthana"],
            Chakra::SolarPlexus => &["solar plexus", "solar_plexus", "manipura"],
            Chakra::Heart => &["heart", "anahata"],
            Chakra::Throat => &["throat", "vishuddha"],
            Chakra::ThirdEye => &["third eye", "third_eye", "ajna", "brow"],
            Chakra::Crown => &["crown", "sahasrara"],
        }
    }
}

impl fmt::Display for Chakra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chakra {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase().replace(['-', '_'], " ");
        Chakra::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| format!("unknown chakra: '{s}'"))
    }
}

/// Element tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Ether,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Ether => "ether",
        }
    }
}

/// Mood identifiers accepted in a recommendation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Anxious,
    Tired,
    Angry,
    Confused,
    Lonely,
    Unmotivated,
}

impl Mood {
    pub const ALL: [Mood; 9] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Stressed,
        Mood::Anxious,
        Mood::Tired,
        Mood::Angry,
        Mood::Confused,
        Mood::Lonely,
        Mood::Unmotivated,
    ];

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
            Mood::Tired => "tired",
            Mood::Angry => "angry",
            Mood::Confused => "confused",
            Mood::Lonely => "lonely",
            Mood::Unmotivated => "unmotivated",
        }
    }

    /// Acute moods earn the urgency bonus for calming stones.
    pub fn is_acute(&self) -> bool {
        matches!(self, Mood::Stressed | Mood::Anxious)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| format!("unknown mood: '{s}'"))
    }
}

/// How strongly an entry's claimed effect is corroborated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceLevel {
    Low,
    Medium,
    High,
}

impl EvidenceLevel {
    pub fn name(&self) -> &'static str {
        match self {
            EvidenceLevel::Low => "low",
            EvidenceLevel::Medium => "medium",
            EvidenceLevel::High => "high",
        }
    }
}

/// Usage scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Meditation,
    Daily,
    Healing,
    Protection,
}

impl Scenario {
    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Meditation => "meditation",
            Scenario::Daily => "daily",
            Scenario::Healing => "healing",
            Scenario::Protection => "protection",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meditation" => Ok(Scenario::Meditation),
            "daily" => Ok(Scenario::Daily),
            "healing" => Ok(Scenario::Healing),
            "protection" => Ok(Scenario::Protection),
            _ => Err(format!("unknown scenario: '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chakra_from_str_accepts_separators() {
        assert_eq!("solar_plexus".parse::<Chakra>(), Ok(Chakra::SolarPlexus));
        assert_eq!("Third-Eye".parse::<Chakra>(), Ok(Chakra::ThirdEye));
        assert!("spleen".parse::<Chakra>().is_err());
    }

    #[test]
    fn test_mood_from_str() {
        assert_eq!("Tired".parse::<Mood>(), Ok(Mood::Tired));
        assert!("bored".parse::<Mood>().is_err());
    }

    #[test]
    fn test_acute_moods() {
        let acute: Vec<_> = Mood::ALL.into_iter().filter(Mood::is_acute).collect();
        assert_eq!(acute, vec![Mood::Stressed, Mood::Anxious]);
    }

    #[test]
    fn test_scenario_serde_lowercase() {
        let json = serde_json::to_string(&Scenario::Protection).unwrap();
        assert_eq!(json, r#""protection""#);
    }
}
