//! # Lithos Core Library
//!
//! This library provides the recommendation engine behind Lithos: it ranks a
//! fixed stone catalog against a mood, a personal profile and a time-derived
//! energy state, and explains every recommendation.
//!
//! Everything here is a pure function over explicit inputs. The only shared
//! state is the read-only [`CatalogStore`]; the wall clock is injected
//! through [`Clock`].
//!
//! ## Pipeline
//!
//! - **Catalog**: immutable stone table plus time/trend affinity tables
//! - **Profile**: best-effort parsing of upstream prose into a [`PersonalProfile`]
//! - **Energy**: physical/mental/spiritual [`EnergyState3D`] from time and profile
//! - **Scoring**: one [`MatchScorer`] driven by a [`ScoringStrategy`] preset
//! - **Ranking**: stable sort, truncation and confidence labels
//! - **Usage**: usage instructions adapted to time of day and need
//!
//! ## Key Components
//!
//! - [`Engine`]: `recommend` (basic mode) and `intelligent_recommend`
//! - [`parse_profile`]: profile adapter
//! - [`estimate_energy_state`]: energy estimator
//! - [`Config`]: TOML configuration

pub mod catalog;
pub mod clock;
pub mod config;
pub mod energy;
pub mod engine;
pub mod error;
pub mod profile;
pub mod ranker;
pub mod scoring;
pub mod usage;

pub use catalog::{CatalogEntry, CatalogStore, Chakra, Element, EvidenceLevel, Mood, Scenario};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use energy::{estimate_energy_state, EnergyState3D, TimeBucket, Trend};
pub use engine::{Engine, RecommendationContext};
pub use error::{CatalogError, ConfigError, EngineError};
pub use profile::{parse_profile, ChakraScore, EmotionalPattern, EnergyArchetype, PersonalProfile};
pub use ranker::{rank, Confidence, RecommendationResult};
pub use scoring::{MatchScorer, ScoredEntry, ScoringInput, ScoringStrategy, StrategyKind};
pub use usage::usage_for;
