//! Recommendation engine.
//!
//! Ties the pipeline together: estimate the energy state when the caller
//! didn't supply one, score every catalog entry, then rank and label.
//!
//! The engine holds only read-only state, so one instance can serve any
//! number of callers.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogStore, Chakra, Mood, Scenario};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::energy::{estimate_energy_state, EnergyState3D};
use crate::error::{EngineError, Result};
use crate::profile::PersonalProfile;
use crate::ranker::{rank, RecommendationResult};
use crate::scoring::{MatchScorer, ScoringInput, ScoringStrategy, StrategyKind};

/// Caller input for one recommendation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationContext {
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub profile: Option<PersonalProfile>,
    /// Estimated from the engine's clock when absent
    #[serde(default)]
    pub energy_state: Option<EnergyState3D>,
    #[serde(default)]
    pub scenario: Option<Scenario>,
    /// Explicit energy level (1-5); overrides the profile's preferred level
    #[serde(default)]
    pub energy_level: Option<u8>,
    /// Explicit chakra; overrides the profile's weakest chakra
    #[serde(default)]
    pub chakra: Option<Chakra>,
    /// Strategy default when absent
    #[serde(default)]
    pub max_recommendations: Option<usize>,
}

/// Stateless recommendation engine over a loaded catalog.
pub struct Engine {
    catalog: CatalogStore,
    clock: Box<dyn Clock>,
    basic: ScoringStrategy,
    intelligent: ScoringStrategy,
}

impl Engine {
    /// Create an engine reading the system clock.
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            clock: Box::new(SystemClock),
            basic: ScoringStrategy::preset(StrategyKind::Basic),
            intelligent: ScoringStrategy::preset(StrategyKind::Intelligent),
        }
    }

    /// Create an engine from configuration: catalog source and result counts.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => CatalogStore::load(path)?,
            None => CatalogStore::builtin()?,
        };
        let mut engine = Self::new(catalog);
        engine.basic.default_max_recommendations = config.recommend.basic_max;
        engine.intelligent.default_max_recommendations = config.recommend.intelligent_max;
        Ok(engine)
    }

    /// Replace the clock used when a context carries no energy state.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The engine's configured strategy for `kind`.
    pub fn strategy(&self, kind: StrategyKind) -> &ScoringStrategy {
        match kind {
            StrategyKind::Basic => &self.basic,
            StrategyKind::Intelligent => &self.intelligent,
        }
    }

    /// Estimate the energy state now, according to the engine's clock.
    pub fn current_energy_state(&self, profile: Option<&PersonalProfile>) -> EnergyState3D {
        estimate_energy_state(self.clock.now(), profile)
    }

    /// Basic mode.
    pub fn recommend(&self, context: &RecommendationContext) -> Result<Vec<RecommendationResult>> {
        self.recommend_with(&self.basic, context)
    }

    /// Intelligent mode.
    pub fn intelligent_recommend(
        &self,
        profile: &PersonalProfile,
        energy_state: &EnergyState3D,
        mood: Option<Mood>,
        max_recommendations: Option<usize>,
    ) -> Result<Vec<RecommendationResult>> {
        let context = RecommendationContext {
            mood,
            profile: Some(profile.clone()),
            energy_state: Some(energy_state.clone()),
            max_recommendations,
            ..Default::default()
        };
        self.recommend_with(&self.intelligent, &context)
    }

    /// Score, rank and label the whole catalog under `strategy`.
    pub fn recommend_with(
        &self,
        strategy: &ScoringStrategy,
        context: &RecommendationContext,
    ) -> Result<Vec<RecommendationResult>> {
        strategy.validate().map_err(EngineError::Internal)?;
        if let Some(level) = context.energy_level {
            if !(1..=5).contains(&level) {
                return Err(EngineError::InvalidContext(format!(
                    "energy level {level} is outside 1-5"
                )));
            }
        }

        let energy_state = match &context.energy_state {
            Some(state) => state.clone(),
            None => self.current_energy_state(context.profile.as_ref()),
        };
        let input = ScoringInput::resolve(
            strategy,
            context.mood,
            context.profile.as_ref(),
            &energy_state,
            context.scenario,
            context.energy_level,
            context.chakra,
        );

        let scorer = MatchScorer::new(strategy, self.catalog.affinity());
        let scored = self
            .catalog
            .all()
            .iter()
            .map(|entry| scorer.score(entry, &input))
            .collect::<Result<Vec<_>>>()?;

        let max = context
            .max_recommendations
            .unwrap_or(strategy.default_max_recommendations);
        let results = rank(scored, max, strategy.confidence);

        tracing::debug!(
            strategy = %strategy.kind,
            candidates = self.catalog.len(),
            returned = results.len(),
            needs = ?input.needs,
            "ranked recommendations"
        );
        Ok(results)
    }
}
