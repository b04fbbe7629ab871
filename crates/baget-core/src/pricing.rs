//! # Price List
//!
//! The standing prices for every auxiliary material and service the
//! calculator can put on a quote. Molding itself is priced per profile in
//! the catalog; everything else comes from here.
//!
//! ## Price Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Where Prices Live                                 │
//! │                                                                         │
//! │  Frame molding      CatalogProfile.price_per_m   (per profile, CMS)    │
//! │  Everything else    PriceList                    (this module)         │
//! │                                                                         │
//! │  PriceList::default() is the workshop's standing price card.           │
//! │  baget-catalog can override any subset from a TOML file; missing      │
//! │  keys fall back to the defaults via #[serde(default)].                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rules::PvcGrade;
use crate::types::{GlazingType, HangerType, StretcherType};

// =============================================================================
// Price List
// =============================================================================

/// Standing prices in whole currency units.
///
/// Area materials are per m², stretcher bars per linear meter, hardware and
/// the stand per piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceList {
    /// Standard float glass, per m².
    pub glass_per_m2: i64,
    /// Anti-reflective glass, per m².
    pub anti_reflective_per_m2: i64,
    /// Museum glass, per m².
    pub museum_per_m2: i64,
    /// Acrylic sheet, per m².
    pub acrylic_per_m2: i64,
    /// Thin PET film, per m².
    pub pet_film_per_m2: i64,

    /// Mat board for the passepartout border, per m².
    pub mat_board_per_m2: i64,
    /// Rigid cardboard back panel, per m².
    pub cardboard_per_m2: i64,

    /// 3mm PVC backing, per m².
    pub pvc_3mm_per_m2: i64,
    /// 4mm PVC backing, per m².
    pub pvc_4mm_per_m2: i64,
    /// Adhesive mounting film, per m².
    pub adhesive_film_per_m2: i64,

    /// Crocodile clip, per piece.
    pub crocodile_clip: i64,
    /// Wire hanger, per piece.
    pub wire_hanger: i64,
    /// Table stand, per piece.
    pub table_stand: i64,

    /// Narrow stretcher bar, per linear meter.
    pub stretcher_narrow_per_m: i64,
    /// Wide stretcher bar, per linear meter.
    pub stretcher_wide_per_m: i64,
}

impl Default for PriceList {
    /// The workshop's standing price card.
    fn default() -> Self {
        PriceList {
            glass_per_m2: 1200,
            anti_reflective_per_m2: 2400,
            museum_per_m2: 6500,
            acrylic_per_m2: 1800,
            pet_film_per_m2: 500,

            mat_board_per_m2: 900,
            cardboard_per_m2: 650,

            pvc_3mm_per_m2: 700,
            pvc_4mm_per_m2: 900,
            adhesive_film_per_m2: 400,

            crocodile_clip: 50,
            wire_hanger: 150,
            table_stand: 350,

            stretcher_narrow_per_m: 300,
            stretcher_wide_per_m: 450,
        }
    }
}

impl PriceList {
    /// Per-m² price for a glazing type. `GlazingType::None` is free.
    pub fn glazing_per_m2(&self, glazing: GlazingType) -> i64 {
        match glazing {
            GlazingType::None => 0,
            GlazingType::Glass => self.glass_per_m2,
            GlazingType::AntiReflective => self.anti_reflective_per_m2,
            GlazingType::Museum => self.museum_per_m2,
            GlazingType::Acrylic => self.acrylic_per_m2,
            GlazingType::PetFilm => self.pet_film_per_m2,
        }
    }

    /// Per-m² price for a PVC backing grade. `PvcGrade::None` is free.
    pub fn pvc_per_m2(&self, grade: PvcGrade) -> i64 {
        match grade {
            PvcGrade::None => 0,
            PvcGrade::Mm3 => self.pvc_3mm_per_m2,
            PvcGrade::Mm4 => self.pvc_4mm_per_m2,
        }
    }

    /// Per-piece price for hanging hardware.
    pub fn hanger_price(&self, hanger: HangerType) -> i64 {
        match hanger {
            HangerType::Crocodile => self.crocodile_clip,
            HangerType::Wire => self.wire_hanger,
        }
    }

    /// Per-meter price for a stretcher-bar profile.
    pub fn stretcher_per_m(&self, stretcher: StretcherType) -> i64 {
        match stretcher {
            StretcherType::Narrow => self.stretcher_narrow_per_m,
            StretcherType::Wide => self.stretcher_wide_per_m,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_glazing_is_free() {
        let prices = PriceList::default();
        assert_eq!(prices.glazing_per_m2(GlazingType::None), 0);
        assert!(prices.glazing_per_m2(GlazingType::Glass) > 0);
    }

    #[test]
    fn test_museum_glass_is_top_tier() {
        let prices = PriceList::default();
        for glazing in [
            GlazingType::Glass,
            GlazingType::AntiReflective,
            GlazingType::Acrylic,
            GlazingType::PetFilm,
        ] {
            assert!(prices.glazing_per_m2(GlazingType::Museum) > prices.glazing_per_m2(glazing));
        }
    }

    #[test]
    fn test_wide_stretcher_costs_more_than_narrow() {
        // The stretcher-forcing rule silently upgrades narrow to wide on
        // large canvases; the upgrade must never make the quote cheaper.
        let prices = PriceList::default();
        assert!(
            prices.stretcher_per_m(StretcherType::Wide)
                > prices.stretcher_per_m(StretcherType::Narrow)
        );
    }

    #[test]
    fn test_partial_override_falls_back_to_defaults() {
        let prices: PriceList = serde_json::from_str(r#"{"crocodileClip": 60}"#).unwrap();
        assert_eq!(prices.crocodile_clip, 60);
        assert_eq!(prices.table_stand, PriceList::default().table_stand);
    }
}
