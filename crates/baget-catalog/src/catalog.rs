//! # Catalog Loading
//!
//! Parses the CMS catalog export and turns it into a validated, ordered
//! profile list for the quote page.
//!
//! ## Loading Posture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Load Pipeline                              │
//! │                                                                         │
//! │  catalog.json ──► serde_json ──► per-entry validation ──► Catalog       │
//! │                       │                   │                             │
//! │                       │                   ├── bad row? skip + warn      │
//! │                       │                   │   (one typo in the CMS     │
//! │                       │                   │    must not hide the whole │
//! │                       │                   │    assortment)             │
//! │                       │                                                 │
//! │                       └── unreadable / malformed / all rows bad?        │
//! │                           hard error - fail at startup, loudly          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use baget_core::types::CatalogProfile;
use baget_core::validation::validate_profile;

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog File
// =============================================================================

/// The raw shape of the CMS export file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    /// When the CMS generated this export.
    pub generated_at: DateTime<Utc>,

    /// Profiles in catalog order (the CMS controls ordering).
    pub profiles: Vec<CatalogProfile>,
}

// =============================================================================
// Catalog
// =============================================================================

/// A validated, ordered profile catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    generated_at: DateTime<Utc>,
    profiles: Vec<CatalogProfile>,
}

impl Catalog {
    /// Loads and validates a catalog export from disk.
    ///
    /// Invalid entries are skipped with a warning; an export with no valid
    /// entries at all is an error.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CatalogFile =
            serde_json::from_str(&raw).map_err(|source| CatalogError::MalformedCatalog {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Catalog::from_export(file);
        if catalog.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }

        info!(
            profiles = catalog.len(),
            generated_at = %catalog.generated_at(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Builds a catalog from an already-parsed export, skipping invalid
    /// entries. Pure except for the warning log; used directly by tests and
    /// by callers that fetch the export themselves.
    pub fn from_export(file: CatalogFile) -> Self {
        let mut profiles = Vec::with_capacity(file.profiles.len());

        for profile in file.profiles {
            match validate_profile(&profile) {
                Ok(()) => profiles.push(profile),
                Err(reason) => {
                    warn!(
                        article = %profile.article,
                        %reason,
                        "skipping invalid catalog profile"
                    );
                }
            }
        }

        Catalog {
            generated_at: file.generated_at,
            profiles,
        }
    }

    /// When the CMS generated the underlying export.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Profiles in catalog order.
    pub fn profiles(&self) -> &[CatalogProfile] {
        &self.profiles
    }

    /// Number of valid profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no profile survived validation.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Looks up a profile by its CMS id.
    pub fn by_id(&self, id: &str) -> Option<&CatalogProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    /// Looks up a profile by its article code.
    pub fn by_article(&self, article: &str) -> Option<&CatalogProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.article == article)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
