//! Catalog storage.
//!
//! Loads the stone catalog from a TOML document once and serves read-only
//! look-ups afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::affinity::AffinityTables;
use super::entry::CatalogEntry;
use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Wrapper for the catalog TOML document
#[derive(Serialize, Deserialize)]
struct CatalogFile {
    stones: Vec<CatalogEntry>,
    #[serde(default)]
    affinity: AffinityTables,
}

/// Immutable, in-memory catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
    affinity: AffinityTables,
}

impl CatalogStore {
    /// Build a store from entries and affinity tables, validating both.
    pub fn new(entries: Vec<CatalogEntry>, affinity: AffinityTables) -> Result<Self, CatalogError> {
        validate(&entries, &affinity)?;
        Ok(Self { entries, affinity })
    }

    /// The catalog compiled into the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog document.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let store = Self::new(file.stones, file.affinity)?;
        tracing::info!(entries = store.entries.len(), "catalog loaded");
        Ok(store)
    }

    /// Load a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// All entries in catalog order.
    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn by_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn by_category(&self, category: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.display.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn affinity(&self) -> &AffinityTables {
        &self.affinity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entries: &[CatalogEntry], affinity: &AffinityTables) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(CatalogError::DuplicateId(entry.id.clone()));
        }
        if entry.energy_levels.is_empty() {
            return Err(invalid(entry, "energy_levels", "must not be empty".to_string()));
        }
        if let Some(level) = entry.energy_levels.iter().find(|l| !(1..=5).contains(*l)) {
            return Err(invalid(entry, "energy_levels", format!("{level} is outside 1-5")));
        }
        if entry.base_score > 100 {
            return Err(invalid(
                entry,
                "base_score",
                format!("{} is above 100", entry.base_score),
            ));
        }
        if let Some(bonus) = entry.scenario_bonus.iter().find(|b| !(2..=5).contains(&b.points)) {
            return Err(invalid(
                entry,
                "scenario_bonus",
                format!("{} points for {} is outside 2-5", bonus.points, bonus.scenario),
            ));
        }
    }

    for (table, id) in affinity.references() {
        if !seen.contains(id) {
            return Err(CatalogError::UnknownAffinityId {
                table,
                id: id.to_string(),
            });
        }
    }

    Ok(())
}

fn invalid(entry: &CatalogEntry, field: &'static str, message: String) -> CatalogError {
    CatalogError::InvalidField {
        id: entry.id.clone(),
        field,
        message,
    }
}
