//! Multi-factor match scoring.
//!
//! One scorer, parameterized by a [`ScoringStrategy`]. The basic preset
//! renormalizes over the criteria the caller supplied; the intelligent preset
//! adds fixed absolute weights, need inference and an urgency bonus.
//!
//! | Factor | Basic | Intelligent |
//! |--------|-------|-------------|
//! | Mood | 40 | 30 |
//! | Needs | - | 25 |
//! | Personality | 20 | 20 |
//! | Energy level | 25 | 15 |
//! | Chakra | 10 | 6.7 (deficit < 40 only) |
//! | Scenario | 5 | - |
//! | Time of day | - | 5 |
//! | Trend | - | 5 |
//! | Urgency | - | 10 |

mod needs;
mod scorer;
mod strategy;

pub use needs::{derive_needs, Need, SOOTHING_KEYWORDS};
pub use scorer::{MatchScorer, ScoredEntry, ScoringInput, FALLBACK_REASON};
pub use strategy::{
    ConfidenceRule, Factor, FactorWeight, Normalization, ScoringStrategy, StrategyKind,
};
