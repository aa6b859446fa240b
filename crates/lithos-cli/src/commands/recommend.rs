//! Recommendation commands: basic (or configured) mode and intelligent mode.

use clap::Args;
use serde_json::json;

use lithos_core::{Chakra, Config, Mood, RecommendationContext, Scenario, StrategyKind};

use super::{build_engine, print_results, CommandResult, GlobalOpts, ProfileText};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Current mood (happy, sad, stressed, anxious, tired, angry, confused, lonely, unmotivated)
    #[arg(long)]
    pub mood: Option<Mood>,
    /// Usage scenario (meditation, daily, healing, protection)
    #[arg(long)]
    pub scenario: Option<Scenario>,
    /// Desired energy intensity (1-5)
    #[arg(long)]
    pub energy_level: Option<u8>,
    /// Chakra to focus on
    #[arg(long)]
    pub chakra: Option<Chakra>,
    /// Number of results
    #[arg(long)]
    pub max: Option<usize>,
    /// Scoring strategy; defaults to recommend.strategy from config
    #[arg(long)]
    pub strategy: Option<StrategyKind>,
    #[command(flatten)]
    pub profile: ProfileText,
}

#[derive(Args, Debug)]
pub struct IntelligentArgs {
    /// Current mood
    #[arg(long)]
    pub mood: Option<Mood>,
    /// Number of results
    #[arg(long)]
    pub max: Option<usize>,
    #[command(flatten)]
    pub profile: ProfileText,
}

pub fn run(args: RecommendArgs, global: &GlobalOpts) -> CommandResult {
    let config = Config::load_or_default();
    let engine = build_engine(global, &config)?;

    let strategy = engine.strategy(args.strategy.unwrap_or(config.recommend.strategy));
    let context = RecommendationContext {
        mood: args.mood,
        profile: args.profile.to_profile(),
        scenario: args.scenario,
        energy_level: args.energy_level,
        chakra: args.chakra,
        max_recommendations: args.max,
        ..Default::default()
    };
    let results = engine.recommend_with(strategy, &context)?;

    if global.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

pub fn run_intelligent(args: IntelligentArgs, global: &GlobalOpts) -> CommandResult {
    let config = Config::load_or_default();
    let engine = build_engine(global, &config)?;

    let profile = args.profile.to_profile().unwrap_or_default();
    let state = engine.current_energy_state(Some(&profile));
    let results = engine.intelligent_recommend(&profile, &state, args.mood, args.max)?;

    if global.json {
        let output = json!({
            "energy_state": state,
            "recommendations": results,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Energy: physical {} / mental {} / spiritual {} ({}, {})",
            state.physical,
            state.mental,
            state.spiritual,
            state.trend.name(),
            state.time_bucket.name()
        );
        println!();
        print_results(&results);
    }
    Ok(())
}
