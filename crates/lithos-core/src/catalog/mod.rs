//! Stone catalog.
//!
//! The catalog is a static, hand-curated table loaded once and read-only
//! thereafter. Affinity tables ride along in the same document.

mod affinity;
mod entry;
mod store;
mod tags;

pub use affinity::{AffinityTables, TimeBucketAffinity, TrendAffinity};
pub use entry::{CatalogEntry, DisplayAttributes, ScenarioBonus};
pub use store::CatalogStore;
pub use tags::{Chakra, Element, EvidenceLevel, Mood, Scenario};

#[cfg(test)]
pub(crate) use entry::fixtures;
