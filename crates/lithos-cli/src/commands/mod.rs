//! Subcommand implementations and the helpers they share.

pub mod catalog;
pub mod config;
pub mod energy;
pub mod profile;
pub mod recommend;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;

use lithos_core::{
    parse_profile, Clock, Config, Engine, EngineError, FixedClock, PersonalProfile,
    RecommendationResult, SystemClock,
};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

const AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Options accepted by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Pin the clock (YYYY-MM-DDTHH:MM:SS, local time)
    #[arg(long, global = true, value_parser = parse_at)]
    pub at: Option<NaiveDateTime>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    /// Use this catalog file instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

impl GlobalOpts {
    /// The pinned time, or the system clock's.
    pub fn now(&self) -> NaiveDateTime {
        match self.at {
            Some(at) => FixedClock(at).now(),
            None => SystemClock.now(),
        }
    }
}

fn parse_at(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, AT_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
}

/// Profile source text, as produced by an upstream profile provider.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileText {
    /// Personality type, e.g. INFJ
    #[arg(long)]
    pub personality: Option<String>,
    /// Chakra narrative, e.g. "root 40, heart 65"
    #[arg(long)]
    pub chakras: Option<String>,
    /// Free-text insight narrative
    #[arg(long)]
    pub insight: Option<String>,
}

impl ProfileText {
    /// `None` when no profile text was given at all.
    pub fn to_profile(&self) -> Option<PersonalProfile> {
        if self.personality.is_none() && self.chakras.is_none() && self.insight.is_none() {
            return None;
        }
        Some(parse_profile(
            self.personality.as_deref(),
            self.chakras.as_deref(),
            self.insight.as_deref(),
        ))
    }
}

/// Build an engine from configuration plus the global overrides.
pub fn build_engine(global: &GlobalOpts, config: &Config) -> Result<Engine, EngineError> {
    let mut config = config.clone();
    if let Some(path) = &global.catalog {
        tracing::debug!(path = %path.display(), "catalog overridden on command line");
        config.catalog.path = Some(path.clone());
    }
    let engine = Engine::from_config(&config)?;
    Ok(match global.at {
        Some(at) => engine.with_clock(FixedClock(at)),
        None => engine,
    })
}

pub fn print_results(results: &[RecommendationResult]) {
    if results.is_empty() {
        println!("No recommendations.");
        return;
    }

    for (i, r) in results.iter().enumerate() {
        println!(
            "{}. {} [{}] score {} ({} confidence)",
            i + 1,
            r.name,
            r.entry_id,
            r.match_score,
            r.confidence.name()
        );
        for reason in &r.reasons {
            println!("   - {reason}");
        }
        println!("   Usage: {}", r.usage);
    }
}
