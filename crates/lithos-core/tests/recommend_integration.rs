//! Integration tests for the recommendation pipeline.
//!
//! These tests drive the public engine API end to end: catalog loading,
//! profile parsing, energy estimation, scoring and ranking.

use chrono::{NaiveDate, NaiveDateTime};
use lithos_core::{
    parse_profile, CatalogStore, Confidence, Engine, EnergyState3D, FixedClock, Mood,
    PersonalProfile, RecommendationContext, Scenario, ScoringStrategy, TimeBucket, Trend,
};

const TWO_STONES: &str = r#"
[[stones]]
id = "citrine"
name = "Citrine"
color = "yellow"
category = "abundance"
chakra = "solar_plexus"
element = "fire"
energy_levels = [3, 4, 5]
emotions = ["sad", "tired", "happy"]
personality = ["E", "S"]
effects = ["energy boost", "optimism"]
usage = "Carry it in a pocket."
evidence = "medium"
base_score = 75

[[stones]]
id = "black_obsidian"
name = "Black Obsidian"
color = "black"
category = "protection"
chakra = "root"
element = "earth"
energy_levels = [1, 2]
emotions = ["stressed", "anxious"]
personality = ["I", "T"]
effects = ["protection", "grounding"]
usage = "Hold it in your palm."
evidence = "low"
base_score = 65
"#;

fn thursday(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 15)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn builtin_engine() -> Engine {
    Engine::new(CatalogStore::builtin().unwrap()).with_clock(FixedClock(thursday(10)))
}

fn neutral_state() -> EnergyState3D {
    EnergyState3D::from_axes(50, 50, 50, Trend::Stable, TimeBucket::Afternoon, 4)
}

#[test]
fn test_tired_energy_four_prefers_citrine() {
    let catalog = CatalogStore::from_toml_str(TWO_STONES).unwrap();
    let engine = Engine::new(catalog).with_clock(FixedClock(thursday(10)));

    let context = RecommendationContext {
        mood: Some(Mood::Tired),
        energy_level: Some(4),
        max_recommendations: Some(2),
        ..Default::default()
    };
    let results = engine.recommend(&context).unwrap();

    assert!(results.len() <= 2);
    assert_eq!(results[0].entry_id, "citrine");
    assert_eq!(results[0].match_score, 100);
    assert_eq!(
        results[0].reasons,
        vec!["Helps when you feel tired", "Suits energy level 4"]
    );
    assert_eq!(results[1].entry_id, "black_obsidian");
    assert!(results[1].match_score < results[0].match_score);
    assert_eq!(results[1].reasons.len(), 1);
}

#[test]
fn test_recommend_is_deterministic_with_fixed_clock() {
    let engine = builtin_engine();
    let profile = parse_profile(
        Some("ENFP"),
        Some("Root 45, sacral 70, heart 30"),
        Some("A creative soul with rich emotions"),
    );
    let context = RecommendationContext {
        mood: Some(Mood::Sad),
        profile: Some(profile),
        scenario: Some(Scenario::Healing),
        max_recommendations: Some(5),
        ..Default::default()
    };

    let first = engine.recommend(&context).unwrap();
    let second = engine.recommend(&context).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_max_recommendations_bounds() {
    let engine = builtin_engine();
    let catalog_len = engine.catalog().len();

    let none = RecommendationContext {
        max_recommendations: Some(0),
        ..Default::default()
    };
    assert!(engine.recommend(&none).unwrap().is_empty());

    let all = RecommendationContext {
        mood: Some(Mood::Anxious),
        max_recommendations: Some(catalog_len + 10),
        ..Default::default()
    };
    let results = engine.recommend(&all).unwrap();
    assert_eq!(results.len(), catalog_len);

    let mut ids: Vec<_> = results.iter().map(|r| r.entry_id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), catalog_len);
}

#[test]
fn test_confidence_for_score_85_high_evidence_in_both_modes() {
    let catalog = CatalogStore::builtin().unwrap();
    let amethyst = catalog.by_id("amethyst").unwrap();

    let basic = Confidence::assess(ScoringStrategy::basic().confidence, 85, amethyst, false);
    let intelligent =
        Confidence::assess(ScoringStrategy::intelligent().confidence, 85, amethyst, false);
    assert_eq!(basic, Confidence::High);
    assert_eq!(intelligent, Confidence::High);
}

#[test]
fn test_basic_high_confidence_needs_high_evidence() {
    let engine = builtin_engine();
    let context = RecommendationContext {
        mood: Some(Mood::Stressed),
        max_recommendations: Some(20),
        ..Default::default()
    };
    let results = engine.recommend(&context).unwrap();

    for result in &results {
        let entry = engine.catalog().by_id(&result.entry_id).unwrap();
        if result.confidence == Confidence::High {
            assert!(result.match_score >= 80);
            assert_eq!(entry.evidence_level, lithos_core::EvidenceLevel::High);
        }
    }
    // amethyst and black_tourmaline both address stress with high evidence
    let high: Vec<_> = results
        .iter()
        .filter(|r| r.confidence == Confidence::High)
        .map(|r| r.entry_id.as_str())
        .collect();
    assert_eq!(high, vec!["amethyst", "black_tourmaline"]);
}

#[test]
fn test_stressed_urgency_bonus_only_for_soothing_stone() {
    let doc = r#"
[[stones]]
id = "soothing"
name = "Soothing"
color = "blue"
category = "calm"
chakra = "throat"
element = "water"
energy_levels = [3]
emotions = ["happy"]
personality = []
effects = ["grounding", "soothing"]
usage = "Hold it."
evidence = "medium"
base_score = 50

[[stones]]
id = "plain"
name = "Plain"
color = "grey"
category = "calm"
chakra = "throat"
element = "water"
energy_levels = [3]
emotions = ["happy"]
personality = []
effects = ["grounding"]
usage = "Hold it."
evidence = "medium"
base_score = 50
"#;
    let engine = Engine::new(CatalogStore::from_toml_str(doc).unwrap());
    let profile = PersonalProfile::default();
    let results = engine
        .intelligent_recommend(&profile, &neutral_state(), Some(Mood::Stressed), None)
        .unwrap();

    // needs 25 + preferred energy 15, plus urgency 10 for the soothing stone
    assert_eq!(results[0].entry_id, "soothing");
    assert_eq!(results[0].match_score, 50);
    assert!(results[0].reasons.iter().any(|r| r.starts_with("Immediate soothing")));
    assert_eq!(results[1].entry_id, "plain");
    assert_eq!(results[1].match_score, 40);
    assert!(!results[1].reasons.iter().any(|r| r.starts_with("Immediate soothing")));
    assert_eq!(results[1].confidence, Confidence::Low);
}

#[test]
fn test_intelligent_mood_match_floors_confidence() {
    let engine = builtin_engine();
    let profile = PersonalProfile::default();
    let results = engine
        .intelligent_recommend(&profile, &neutral_state(), Some(Mood::Confused), Some(20))
        .unwrap();

    for result in &results {
        let entry = engine.catalog().by_id(&result.entry_id).unwrap();
        if entry.emotion_tags.contains(&Mood::Confused) {
            assert_eq!(result.confidence, Confidence::High);
            assert_eq!(result.reasons[0], "Helps when you feel confused");
        }
    }
}

#[test]
fn test_intelligent_uses_affinity_tables_and_need_focus() {
    let engine = builtin_engine();
    let profile = parse_profile(Some("ESTP"), None, None);
    // 08:00 on a weekday: morning bucket, rising trend
    let state = lithos_core::estimate_energy_state(thursday(8), Some(&profile));
    assert_eq!(state.time_bucket, TimeBucket::Morning);
    assert_eq!(state.trend, Trend::Rising);

    let results = engine
        .intelligent_recommend(&profile, &state, Some(Mood::Tired), Some(1))
        .unwrap();
    assert_eq!(results[0].entry_id, "citrine");
    assert!(results[0].reasons.contains(&"Especially effective in the morning".to_string()));
    assert!(results[0].reasons.contains(&"Fits your rising energy".to_string()));
    // physical is high, so the primary need is grounding -> protection focus
    assert!(results[0].usage.contains("in the morning"));
    assert!(results[0]
        .usage
        .ends_with("Place it near the entrance of your room or workspace."));
}

#[test]
fn test_catalog_file_round_trip_through_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stones.toml");
    std::fs::write(&path, TWO_STONES).unwrap();

    let catalog = CatalogStore::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.by_category("protection")[0].id, "black_obsidian");
    assert!(catalog.by_id("amethyst").is_none());
}
