//! Core error types for lithos-core.
//!
//! Each concern gets its own thiserror enum; [`EngineError`] is what the
//! recommendation entry points return.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the recommendation engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The catalog could not be loaded or failed validation
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Caller supplied a context value outside its documented range
    #[error("Invalid context: {0}")]
    InvalidContext(String),

    /// Something inside the scoring pipeline misbehaved
    #[error("Internal engine error: {0}")]
    Internal(String),
}

/// Catalog loading and validation errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("Failed to read catalog at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML document did not match the catalog schema
    #[error("Failed to parse catalog TOML: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// A catalog must carry at least one entry
    #[error("Catalog contains no entries")]
    Empty,

    /// Two entries share the same id
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    /// A field is outside its allowed range
    #[error("Invalid value for '{field}' on entry '{id}': {message}")]
    InvalidField {
        id: String,
        field: &'static str,
        message: String,
    },

    /// An affinity table references an id the catalog does not contain
    #[error("Affinity table '{table}' references unknown id '{id}'")]
    UnknownAffinityId { table: String, id: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The data directory could not be resolved or created
    #[error("Failed to access data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_converts_into_engine_error() {
        let err: EngineError = CatalogError::Empty.into();
        assert_eq!(err.to_string(), "Catalog error: Catalog contains no entries");
    }

    #[test]
    fn affinity_error_names_table_and_id() {
        let err = CatalogError::UnknownAffinityId {
            table: "time_bucket.morning".to_string(),
            id: "unobtainium".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Affinity table 'time_bucket.morning' references unknown id 'unobtainium'"
        );
    }
}
