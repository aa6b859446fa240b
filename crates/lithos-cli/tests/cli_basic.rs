//! Basic CLI E2E tests.
//!
//! Tests invoke the built `lithos` binary with an isolated config directory
//! and a pinned clock, then verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

const AT: &str = "2026-10-15T08:00:00";

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

/// Run the CLI against `config_dir` and return (stdout, stderr, code).
fn run_cli(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_lithos"))
        .args(args)
        .env("LITHOS_CONFIG_DIR", config_dir)
        .env_remove("LITHOS_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(config_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(config_dir, args);
    assert_eq!(code, 0, "CLI failed for {args:?}: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_recommend_default_returns_three() {
    let dir = TempDir::new().unwrap();
    let json = run_json(dir.path(), &["recommend", "--at", AT, "--json"]);
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["entry_id"], "amethyst");
    assert_eq!(results[0]["match_score"], 85);
}

#[test]
fn test_recommend_with_catalog_override() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("stones.toml");
    std::fs::write(&catalog, TWO_STONES).unwrap();

    let json = run_json(
        dir.path(),
        &[
            "recommend",
            "--mood",
            "tired",
            "--energy-level",
            "4",
            "--max",
            "2",
            "--catalog",
            catalog.to_str().unwrap(),
            "--json",
        ],
    );
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["entry_id"], "citrine");
    assert_eq!(results[0]["match_score"], 100);
    assert_eq!(results[1]["entry_id"], "black_obsidian");
}

#[test]
fn test_recommend_text_output() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["recommend", "--mood", "stressed", "--at", AT]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1. Amethyst [amethyst] score 100 (high confidence)"));
    assert!(stdout.contains("Helps when you feel stressed"));
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_recommend_rejects_bad_energy_level() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["recommend", "--energy-level", "9", "--at", AT]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("outside 1-5"));
}

#[test]
fn test_recommend_rejects_unknown_mood() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["recommend", "--mood", "bored"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown mood"));
}

#[test]
fn test_bad_at_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["energy", "--at", "yesterday"]);
    assert_ne!(code, 0);
}

#[test]
fn test_intelligent_json() {
    let dir = TempDir::new().unwrap();
    let json = run_json(
        dir.path(),
        &[
            "intelligent",
            "--personality",
            "ESTP",
            "--mood",
            "tired",
            "--max",
            "1",
            "--at",
            AT,
            "--json",
        ],
    );
    assert_eq!(json["energy_state"]["time_bucket"], "morning");
    assert_eq!(json["energy_state"]["trend"], "rising");
    let results = json["recommendations"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["entry_id"], "citrine");
}

#[test]
fn test_energy_json() {
    let dir = TempDir::new().unwrap();
    // 2026-10-14 is a Wednesday
    let json = run_json(dir.path(), &["energy", "--at", "2026-10-14T08:00:00", "--json"]);
    assert_eq!(json["physical"], 70);
    assert_eq!(json["mental"], 60);
    assert_eq!(json["spiritual"], 50);
    assert_eq!(json["day_of_week"], 3);
}

#[test]
fn test_energy_text() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["energy", "--at", "2026-10-14T08:00:00"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("(Wednesday)"));
    assert!(stdout.contains("Trend:     rising"));

    // 2026-10-17 is a Saturday
    let (stdout, _, code) = run_cli(dir.path(), &["energy", "--at", "2026-10-17T19:00:00"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("(Saturday, weekend)"));
}

#[test]
fn test_profile_json() {
    let dir = TempDir::new().unwrap();
    let json = run_json(
        dir.path(),
        &["profile", "--personality", "INFJ", "--chakras", "heart 30", "--json"],
    );
    assert_eq!(json["personality_type"], "INFJ");
    assert_eq!(json["preferred_energy_level"], 2);
    assert_eq!(json["chakra_balance"]["heart"]["state"], "known");
    assert_eq!(json["chakra_balance"]["heart"]["value"], 30);
    assert_eq!(json["chakra_balance"]["root"]["state"], "unknown");
}

#[test]
fn test_catalog_list_and_show() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["catalog", "list", "--category", "protection"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("black_obsidian"));
    assert!(stdout.contains("black_tourmaline"));
    assert!(!stdout.contains("citrine"));

    let json = run_json(dir.path(), &["catalog", "show", "citrine", "--json"]);
    assert_eq!(json["id"], "citrine");
    assert_eq!(json["chakra"], "solar_plexus");

    let (_, stderr, code) = run_cli(dir.path(), &["catalog", "show", "unobtainium"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unobtainium"));
}

#[test]
fn test_config_set_changes_default_count() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("config.toml"));

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "recommend.basic_max", "5"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "recommend.basic_max"]);
    assert_eq!(stdout.trim(), "5");

    let json = run_json(dir.path(), &["recommend", "--at", AT, "--json"]);
    assert_eq!(json.as_array().unwrap().len(), 5);

    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "recommend.nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_strategy_switches_recommend_mode() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "recommend.strategy", "intelligent"]);
    assert_eq!(code, 0);

    let json = run_json(dir.path(), &["recommend", "--at", AT, "--json"]);
    // intelligent_max default
    assert_eq!(json.as_array().unwrap().len(), 4);
}
