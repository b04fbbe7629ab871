//! # Price List Overrides
//!
//! The workshop adjusts material prices a few times a year. Rather than
//! recompiling, the website reads an optional TOML file at startup and lays
//! it over the standing price card.
//!
//! ## Override File Format
//! ```toml
//! # prices.toml - only list what changed; everything else keeps the
//! # standing price from PriceList::default()
//! cardboardPerM2 = 700
//! crocodileClip = 60
//! ```

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use baget_core::pricing::PriceList;

use crate::error::{CatalogError, CatalogResult};

/// Loads a price override file, falling back to the standing prices when
/// the file does not exist.
///
/// A present-but-malformed file IS an error: silently quoting with stale
/// prices is worse than failing at startup.
pub fn load_prices_or_default(path: impl AsRef<Path>) -> CatalogResult<PriceList> {
    let path = path.as_ref();

    if !path.exists() {
        info!(path = %path.display(), "no price override file, using standing prices");
        return Ok(PriceList::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let prices: PriceList =
        toml::from_str(&raw).map_err(|source| CatalogError::MalformedPrices {
            path: path.to_path_buf(),
            source,
        })?;

    if prices == PriceList::default() {
        warn!(path = %path.display(), "price override file present but changes nothing");
    } else {
        info!(path = %path.display(), "price overrides loaded");
    }

    Ok(prices)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_standing_prices() {
        let prices = load_prices_or_default("/definitely/not/here.toml").unwrap();
        assert_eq!(prices, PriceList::default());
    }

    #[test]
    fn test_partial_override_keeps_other_prices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.toml");
        std::fs::write(&path, "crocodileClip = 60\n").unwrap();

        let prices = load_prices_or_default(&path).unwrap();
        assert_eq!(prices.crocodile_clip, 60);
        assert_eq!(prices.table_stand, PriceList::default().table_stand);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.toml");
        std::fs::write(&path, "crocodileClip = \"sixty\"\n").unwrap();

        assert!(matches!(
            load_prices_or_default(&path),
            Err(CatalogError::MalformedPrices { .. })
        ));
    }
}
