//! # Error Types
//!
//! File-layer errors for baget-catalog. Unlike quote preconditions (which
//! degrade to warnings inside baget-core), a missing or unreadable catalog
//! file is a real failure the website must handle at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog and price file errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read at all.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog export is not valid JSON for the expected shape.
    #[error("Malformed catalog file {path}: {source}")]
    MalformedCatalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The price override file is not valid TOML for the expected shape.
    #[error("Malformed price file {path}: {source}")]
    MalformedPrices {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Every entry in the export failed validation.
    ///
    /// An empty catalog would render a quote page with nothing to pick;
    /// better to fail loudly at startup.
    #[error("Catalog {path} contains no valid profiles")]
    Empty { path: PathBuf },
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_the_path() {
        let err = CatalogError::Empty {
            path: PathBuf::from("/data/catalog.json"),
        };
        assert_eq!(
            err.to_string(),
            "Catalog /data/catalog.json contains no valid profiles"
        );
    }
}
