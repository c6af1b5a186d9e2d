//! Persistence layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from configuration store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted document exists but is not a valid configuration
    /// document. Surfaced to the operator instead of silently replaced:
    /// fabricating a default here would discard real warning history.
    #[error("config file {path} exists but could not be parsed: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The backing file exists but could not be read
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file could not be written. The in-memory mutation that
    /// preceded the write is not rolled back.
    #[error("failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory document failed to serialize
    #[error("failed to encode config document")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    /// Check if this is the corrupt-document case
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_display_names_the_path() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = StoreError::Corrupt { path: PathBuf::from("config.json"), source };
        assert!(err.to_string().contains("config.json"));
        assert!(err.is_corrupt());
    }
}
