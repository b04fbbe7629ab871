//! # Domain Types
//!
//! Core domain types for the quoting engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CatalogProfile  │   │   QuoteInput    │   │    WorkType     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  width/height   │   │  Canvas         │       │
//! │  │  article (biz)  │   │  profile        │   │  StretchedCanvas│       │
//! │  │  width_mm       │   │  glazing        │   │  Rhinestone ... │       │
//! │  │  price_per_m    │   │  matting ...    │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  GlazingType    │   │   HangerType    │   │ StretcherType   │       │
//! │  │  None/Glass/... │   │ Crocodile/Wire  │   │  Narrow/Wide    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A catalog profile has:
//! - `id`: UUID - immutable, assigned by the CMS
//! - `article`: business code printed on the physical stock, human-readable

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Catalog Profile
// =============================================================================

/// An available frame molding ("baget") entry from the catalog.
///
/// Immutable reference data: the catalog is loaded externally and passed in
/// by value. Many quotes may reference the same profile; the engine never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProfile {
    /// Unique identifier (UUID, assigned by the CMS).
    pub id: String,

    /// Article code printed on the stock stick - business identifier.
    pub article: String,

    /// Display name shown in the picker and on the quote.
    pub name: String,

    /// Molding color (display data, not priced).
    pub color: String,

    /// Style tag used by the catalog filter ("classic", "modern", ...).
    pub style: String,

    /// Face width of the profile in millimeters.
    pub width_mm: f64,

    /// Price per linear meter in whole currency units.
    pub price_per_m: i64,

    /// Image reference (path or URL resolved by the website).
    pub image: String,
}

impl CatalogProfile {
    /// Returns the per-meter price as Money.
    #[inline]
    pub fn price_per_meter(&self) -> Money {
        Money::from_units(self.price_per_m)
    }
}

// =============================================================================
// Work Type
// =============================================================================

/// What kind of artwork is being framed.
///
/// The work type drives the auto-addition rules: some media physically
/// require rigid backing or adhesive mounting to be frameable at all
/// (see [`crate::rules`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    /// Unstretched canvas (rolled or flat).
    Canvas,
    /// Canvas already stretched over bars, or to be re-stretched here.
    StretchedCanvas,
    /// Rhinestone/diamond mosaic.
    Rhinestone,
    /// Thread embroidery.
    Embroidery,
    /// Bead embroidery.
    Beads,
    /// Photographic print.
    Photo,
    /// Poster, drawing, certificate - anything else flat.
    #[default]
    Other,
}

// =============================================================================
// Glazing Type
// =============================================================================

/// Glazing in front of the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum GlazingType {
    /// No glazing (typical for stretched canvas).
    #[default]
    None,
    /// Standard float glass.
    Glass,
    /// Anti-reflective glass.
    AntiReflective,
    /// Museum glass (anti-reflective + UV filtering).
    Museum,
    /// Acrylic sheet (shatter-safe, lighter).
    Acrylic,
    /// Thin PET film (budget option for large posters).
    PetFilm,
}

// =============================================================================
// Hanging Hardware
// =============================================================================

/// Hanging hardware on the back of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum HangerType {
    /// Crocodile clip - the default for flat works.
    #[default]
    Crocodile,
    /// Steel wire across the back - mandatory for stretched canvas.
    Wire,
}

// =============================================================================
// Stretcher Bars
// =============================================================================

/// Stretcher-bar profile for canvas work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StretcherType {
    /// Narrow profile - only legal up to 500mm per side.
    #[default]
    Narrow,
    /// Wide profile - stiffer, required for large canvases.
    Wide,
}

// =============================================================================
// Quote Input
// =============================================================================

/// The request record for one quote.
///
/// ## Design Notes
/// Config-object style: one explicit record instead of a dozen positional
/// parameters. Every field is serde-defaulted so the quote form can send
/// whatever it has on each keystroke - missing or garbage fields degrade to
/// a warned zero quote, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteInput {
    /// Work width in millimeters. Caller-supplied; may be NaN or junk.
    pub width_mm: f64,

    /// Work height in millimeters. Caller-supplied; may be NaN or junk.
    pub height_mm: f64,

    /// Number of identical pieces. Clamped to >= 1 by the calculator.
    pub quantity: i64,

    /// Selected frame profile. None means "no quote possible yet".
    pub profile: Option<CatalogProfile>,

    /// What is being framed.
    pub work_type: WorkType,

    /// Glazing in front of the work.
    pub glazing: GlazingType,

    /// Whether a matting (passepartout) border is requested.
    pub matting: bool,

    /// Matting reveal width on top and sides, millimeters.
    pub mat_side_mm: f64,

    /// Matting reveal width at the bottom, millimeters. Independently
    /// settable: bottom mats are conventionally cut wider.
    pub mat_bottom_mm: f64,

    /// Whether a rigid cardboard back panel is requested.
    pub back_panel: bool,

    /// Requested hanging hardware. None means "use the default".
    pub hanger: Option<HangerType>,

    /// Whether a table stand is requested.
    pub stand: bool,

    /// Requested stretcher-bar profile. Only meaningful for
    /// [`WorkType::StretchedCanvas`].
    pub stretcher: StretcherType,
}

impl Default for QuoteInput {
    fn default() -> Self {
        QuoteInput {
            width_mm: 0.0,
            height_mm: 0.0,
            quantity: 1,
            profile: None,
            work_type: WorkType::default(),
            glazing: GlazingType::default(),
            matting: false,
            mat_side_mm: 0.0,
            mat_bottom_mm: 0.0,
            back_panel: false,
            hanger: None,
            stand: false,
            stretcher: StretcherType::default(),
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
    fn test_enum_defaults() {
        assert_eq!(WorkType::default(), WorkType::Other);
        assert_eq!(GlazingType::default(), GlazingType::None);
        assert_eq!(HangerType::default(), HangerType::Crocodile);
        assert_eq!(StretcherType::default(), StretcherType::Narrow);
    }

    #[test]
    fn test_quote_input_default_quantity_is_one() {
        let input = QuoteInput::default();
        assert_eq!(input.quantity, 1);
        assert!(input.profile.is_none());
    }

    #[test]
    fn test_quote_input_deserializes_from_sparse_json() {
        // The quote form sends partial records while the user is typing.
        let input: QuoteInput =
            serde_json::from_str(r#"{"widthMm": 500, "workType": "stretched_canvas"}"#).unwrap();
        assert_eq!(input.width_mm, 500.0);
        assert_eq!(input.work_type, WorkType::StretchedCanvas);
        assert_eq!(input.quantity, 1);
        assert!(!input.matting);
    }

    #[test]
    fn test_profile_price_as_money() {
        let profile = CatalogProfile {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            article: "OAK-30".to_string(),
            name: "Oak classic".to_string(),
            color: "natural".to_string(),
            style: "classic".to_string(),
            width_mm: 30.0,
            price_per_m: 1000,
            image: "/img/oak-30.jpg".to_string(),
        };
        assert_eq!(profile.price_per_meter().units(), 1000);
    }
}
