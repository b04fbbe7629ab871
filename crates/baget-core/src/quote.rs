//! # Quote Calculator
//!
//! Combines the catalog profile, the auto-addition rules, and the constraint
//! resolver into an itemized, totaled quote.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quote Computation                                  │
//! │                                                                         │
//! │  QuoteInput                                                             │
//! │      │                                                                  │
//! │      ├── resolve_auto_additions(work_type)     mandatory materials      │
//! │      ├── resolve_options(input)                gates + effective size   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  size valid AND profile picked?                                         │
//! │      │ no ──► zero total, warnings, gates still populated               │
//! │      │ yes                                                              │
//! │      ▼                                                                  │
//! │  area ─► molding ─► materials ─► pvc ─► film ─► hanging ─► stand ─►     │
//! │  stretcher ─► Σ raw × quantity ─► round ONCE ─► QuoteResult             │
//! │                                                                         │
//! │  Zero-cost components are dropped from the item list but keep their     │
//! │  raw values in the breakdown ("included automatically" badges).         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! The calculator never panics and never returns an error. The quote form
//! calls it on every keystroke; all invalid states degrade to a warned,
//! zero-cost result with the option gates still live.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constraints::{resolve_options, EffectiveOptions};
use crate::money::Money;
use crate::pricing::PriceList;
use crate::rules::{resolve_auto_additions, AutoAdditions, PvcGrade};
use crate::types::{HangerType, QuoteInput, StretcherType, WorkType};
use crate::validation::clamp_quantity;
use crate::{DOUBLE_CLIP_MIN_WIDTH_MM, MITER_ALLOWANCE_WIDTHS, WASTE_FACTOR};

/// Warning shown while no frame profile is selected.
pub const WARN_NO_PROFILE: &str = "Select a frame profile";

/// Warning shown while the dimensions are missing or below the 50mm minimum.
pub const WARN_BAD_SIZE: &str = "Enter valid dimensions (at least 50 mm per side)";

// =============================================================================
// Line Items
// =============================================================================

/// Stable key identifying a quote component.
///
/// The website keys its breakdown rows and "included" badges off these;
/// renaming a variant is a frontend-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineKey {
    /// Frame molding, priced per meter from the catalog profile.
    Baget,
    /// Area materials: glazing, mat board, cardboard back panel.
    Materials,
    /// Mandatory PVC backing (rule table).
    Pvc,
    /// Mandatory adhesive film (rule table).
    Film,
    /// Hanging hardware.
    Hanging,
    /// Table stand.
    Stand,
    /// Stretcher bars (stretched canvas only).
    Stretcher,
}

/// One priced component of the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineItem {
    /// Stable component key.
    pub key: LineKey,

    /// Resolved display title, computed quantities included
    /// (e.g. "Crocodile clip × 2").
    pub title: String,

    /// Price for one piece, whole currency units.
    pub unit_price: i64,

    /// Price for the requested quantity, whole currency units.
    pub total: i64,
}

impl QuoteLineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price_money(&self) -> Money {
        Money::from_units(self.unit_price)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn total_money(&self) -> Money {
        Money::from_units(self.total)
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Every intermediate quantity the website's live preview needs.
///
/// Intentionally redundant with the item list: suppressed zero-cost
/// components keep their raw values here so the UI can show "included
/// automatically" badges, and the gate booleans drive option visibility
/// even when the quote itself is idle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    /// Effective area in m².
    pub area_m2: f64,

    /// Linear meters of molding required (corners and waste included).
    pub baget_length_m: f64,

    /// Raw, unrounded cost of each component for ONE piece.
    pub baget_cost: f64,
    pub glazing_cost: f64,
    pub mat_board_cost: f64,
    pub cardboard_cost: f64,
    /// glazing + mat board + cardboard.
    pub materials_cost: f64,
    pub pvc_cost: f64,
    pub film_cost: f64,
    pub hanging_cost: f64,
    pub stand_cost: f64,
    pub stretcher_cost: f64,

    /// Hanging hardware that will actually be fitted.
    pub hanger: HangerType,

    /// Number of hanging fixtures (2 crocodile clips on wide pieces).
    pub hanging_count: u32,

    /// A cardboard back panel will actually be fitted.
    pub back_panel: bool,

    /// Stretcher profile that will actually be used.
    pub stretcher: StretcherType,

    /// A stand will actually be included.
    pub stand: bool,

    /// Gate: a table stand is physically permitted.
    pub stand_allowed: bool,

    /// Gate: the narrow stretcher profile is permitted.
    pub stretcher_narrow_allowed: bool,

    /// The rule-table additions applied to this work type.
    pub additions: AutoAdditions,
}

impl QuoteBreakdown {
    /// Breakdown for an idle quote (no profile or invalid size): all costs
    /// zero, but gates and resolved selections stay live for the UI.
    fn idle(opts: &EffectiveOptions, additions: AutoAdditions) -> Self {
        QuoteBreakdown {
            area_m2: 0.0,
            baget_length_m: 0.0,
            baget_cost: 0.0,
            glazing_cost: 0.0,
            mat_board_cost: 0.0,
            cardboard_cost: 0.0,
            materials_cost: 0.0,
            pvc_cost: 0.0,
            film_cost: 0.0,
            hanging_cost: 0.0,
            stand_cost: 0.0,
            stretcher_cost: 0.0,
            hanger: opts.hanger,
            hanging_count: 1,
            back_panel: opts.back_panel,
            stretcher: opts.stretcher,
            stand: opts.stand,
            stand_allowed: opts.stand_allowed,
            stretcher_narrow_allowed: opts.stretcher_narrow_allowed,
            additions,
        }
    }
}

// =============================================================================
// Quote Result
// =============================================================================

/// The computed response for one quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Grand total for the requested quantity, whole currency units.
    /// Rounded exactly once, at the very end.
    pub total: i64,

    /// Priced components. Zero-cost components are suppressed.
    pub items: Vec<QuoteLineItem>,

    /// Effective outer width in millimeters (matting included).
    pub effective_width_mm: f64,

    /// Effective outer height in millimeters (matting included).
    pub effective_height_mm: f64,

    /// Human-readable precondition warnings; empty when the quote is live.
    pub warnings: Vec<String>,

    /// Intermediate quantities for the live preview.
    pub breakdown: QuoteBreakdown,
}

impl QuoteResult {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total_money(&self) -> Money {
        Money::from_units(self.total)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes a quote against the workshop's standing price list.
///
/// ## Example
/// ```rust
/// use baget_core::quote::compute_quote;
/// use baget_core::types::{CatalogProfile, QuoteInput, WorkType};
///
/// let input = QuoteInput {
///     width_mm: 500.0,
///     height_mm: 700.0,
///     back_panel: true,
///     work_type: WorkType::Canvas,
///     profile: Some(CatalogProfile {
///         id: "550e8400-e29b-41d4-a716-446655440000".into(),
///         article: "OAK-30".into(),
///         name: "Oak classic".into(),
///         color: "natural".into(),
///         style: "classic".into(),
///         width_mm: 30.0,
///         price_per_m: 1000,
///         image: "/img/oak-30.jpg".into(),
///     }),
///     ..QuoteInput::default()
/// };
///
/// let result = compute_quote(&input);
/// assert_eq!(result.total, 3050);
/// assert!(result.warnings.is_empty());
/// ```
pub fn compute_quote(input: &QuoteInput) -> QuoteResult {
    compute_quote_with(input, &PriceList::default())
}

/// Computes a quote against an explicit price list.
///
/// The website passes the standing list (possibly with TOML overrides from
/// baget-catalog); tests pass fixed lists.
pub fn compute_quote_with(input: &QuoteInput, prices: &PriceList) -> QuoteResult {
    let additions = resolve_auto_additions(input.work_type);
    let opts = resolve_options(input);
    let quantity = clamp_quantity(input.quantity);

    let mut warnings = Vec::new();
    if !opts.size_valid {
        warnings.push(WARN_BAD_SIZE.to_string());
    }
    if input.profile.is_none() {
        warnings.push(WARN_NO_PROFILE.to_string());
    }

    // Unsatisfiable preconditions: return the warned zero quote. The
    // effective size and gates are still best-effort so the form preview
    // does not flicker while the visitor types.
    let profile = match input.profile.as_ref() {
        Some(profile) if opts.size_valid => profile,
        _ => {
            return QuoteResult {
                total: 0,
                items: Vec::new(),
                effective_width_mm: opts.effective_width_mm,
                effective_height_mm: opts.effective_height_mm,
                warnings,
                breakdown: QuoteBreakdown::idle(&opts, additions),
            };
        }
    };

    // 1. Effective area in m².
    let area_m2 = opts.effective_width_mm * opts.effective_height_mm / 1_000_000.0;

    // 2. Molding: effective perimeter plus eight profile widths for the
    //    four mitered corners, with the shop's 5% waste allowance.
    let baget_length_m = (2.0 * (opts.effective_width_mm + opts.effective_height_mm)
        + MITER_ALLOWANCE_WIDTHS * profile.width_mm)
        / 1000.0
        * WASTE_FACTOR;
    let baget_cost = baget_length_m * profile.price_per_m as f64;

    // 3. Area materials.
    let glazing_cost = area_m2 * prices.glazing_per_m2(input.glazing) as f64;
    let mat_board_cost = if input.matting {
        area_m2 * prices.mat_board_per_m2 as f64
    } else {
        0.0
    };
    let cardboard_cost = if opts.back_panel {
        area_m2 * prices.cardboard_per_m2 as f64
    } else {
        0.0
    };
    let materials_cost = glazing_cost + mat_board_cost + cardboard_cost;

    // 4-5. Rule-table additions.
    let pvc_cost = area_m2 * prices.pvc_per_m2(additions.pvc_grade) as f64;
    let film_cost = if additions.adhesive_film {
        area_m2 * prices.adhesive_film_per_m2 as f64
    } else {
        0.0
    };

    // 6. Hanging hardware. Wide pieces tilt on one crocodile clip.
    let hanging_count: u32 = match opts.hanger {
        HangerType::Crocodile if opts.effective_width_mm > DOUBLE_CLIP_MIN_WIDTH_MM => 2,
        _ => 1,
    };
    let hanging_cost = (prices.hanger_price(opts.hanger) * hanging_count as i64) as f64;

    // 7. Stand (already clamped by the gate).
    let stand_cost = if opts.stand {
        prices.table_stand as f64
    } else {
        0.0
    };

    // 8. Stretcher bars size to the RAW canvas, not the mat opening.
    let stretcher_cost = if input.work_type == WorkType::StretchedCanvas {
        let bar_length_m = 2.0 * (input.width_mm + input.height_mm) / 1000.0;
        bar_length_m * prices.stretcher_per_m(opts.stretcher) as f64
    } else {
        0.0
    };

    let components: [(LineKey, String, f64); 7] = [
        (
            LineKey::Baget,
            format!("Frame molding {}, {:.2} m", profile.article, baget_length_m),
            baget_cost,
        ),
        (LineKey::Materials, "Materials".to_string(), materials_cost),
        (
            LineKey::Pvc,
            match additions.pvc_grade {
                PvcGrade::Mm4 => "PVC backing 4 mm".to_string(),
                _ => "PVC backing 3 mm".to_string(),
            },
            pvc_cost,
        ),
        (LineKey::Film, "Adhesive film".to_string(), film_cost),
        (
            LineKey::Hanging,
            match (opts.hanger, hanging_count) {
                (HangerType::Wire, _) => "Wire hanger".to_string(),
                (HangerType::Crocodile, 1) => "Crocodile clip".to_string(),
                (HangerType::Crocodile, n) => format!("Crocodile clip × {}", n),
            },
            hanging_cost,
        ),
        (LineKey::Stand, "Table stand".to_string(), stand_cost),
        (
            LineKey::Stretcher,
            match opts.stretcher {
                StretcherType::Narrow => "Stretcher bars (narrow)".to_string(),
                StretcherType::Wide => "Stretcher bars (wide)".to_string(),
            },
            stretcher_cost,
        ),
    ];

    let raw_total: f64 = components.iter().map(|(_, _, cost)| cost).sum();

    // Zero-cost components stay out of the list; their raw values remain
    // visible in the breakdown.
    let items = components
        .into_iter()
        .filter(|(_, _, cost)| *cost > 0.0)
        .map(|(key, title, cost)| QuoteLineItem {
            key,
            title,
            unit_price: Money::from_raw(cost).units(),
            total: Money::from_raw(cost * quantity as f64).units(),
        })
        .collect();

    QuoteResult {
        // Rounded once: per-line rounding would drift across quantity > 1.
        total: Money::from_raw(raw_total * quantity as f64).units(),
        items,
        effective_width_mm: opts.effective_width_mm,
        effective_height_mm: opts.effective_height_mm,
        warnings,
        breakdown: QuoteBreakdown {
            area_m2,
            baget_length_m,
            baget_cost,
            glazing_cost,
            mat_board_cost,
            cardboard_cost,
            materials_cost,
            pvc_cost,
            film_cost,
            hanging_cost,
            stand_cost,
            stretcher_cost,
            hanger: opts.hanger,
            hanging_count,
            back_panel: opts.back_panel,
            stretcher: opts.stretcher,
            stand: opts.stand,
            stand_allowed: opts.stand_allowed,
            stretcher_narrow_allowed: opts.stretcher_narrow_allowed,
            additions,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogProfile, GlazingType};

    /// 30mm-wide profile at 1000 per meter, the shop's bread-and-butter molding.
    fn oak_profile() -> CatalogProfile {
        CatalogProfile {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            article: "OAK-30".to_string(),
            name: "Oak classic".to_string(),
            color: "natural".to_string(),
            style: "classic".to_string(),
            width_mm: 30.0,
            price_per_m: 1000,
            image: "/img/oak-30.jpg".to_string(),
        }
    }

    fn plain_canvas_input() -> QuoteInput {
        QuoteInput {
            width_mm: 500.0,
            height_mm: 700.0,
            quantity: 1,
            profile: Some(oak_profile()),
            work_type: WorkType::Canvas,
            glazing: GlazingType::None,
            back_panel: true,
            hanger: Some(HangerType::Crocodile),
            ..QuoteInput::default()
        }
    }

    fn keys(result: &QuoteResult) -> Vec<LineKey> {
        result.items.iter().map(|item| item.key).collect()
    }

    #[test]
    fn test_plain_canvas_exact_total_and_items() {
        let result = compute_quote(&plain_canvas_input());

        assert_eq!(result.total, 3050);
        assert_eq!(
            keys(&result),
            vec![LineKey::Baget, LineKey::Materials, LineKey::Hanging]
        );
        assert!(result.warnings.is_empty());

        assert!((result.breakdown.area_m2 - 0.35).abs() < 1e-9);
        assert!((result.breakdown.baget_length_m - 2.772).abs() < 1e-9);
        assert!((result.breakdown.baget_cost - 2772.0).abs() < 1e-6);
        assert!((result.breakdown.materials_cost - 227.5).abs() < 1e-9);
        assert!((result.breakdown.hanging_cost - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_matting_grows_size_and_total() {
        let plain = compute_quote(&plain_canvas_input());

        let mut input = plain_canvas_input();
        input.matting = true;
        input.mat_side_mm = 40.0;
        input.mat_bottom_mm = 55.0;
        let matted = compute_quote(&input);

        assert_eq!(matted.effective_width_mm, 580.0);
        assert_eq!(matted.effective_height_mm, 795.0);
        assert!(matted.total > plain.total);
        // Matting adds the mat board sheet to the materials line.
        assert!(matted.breakdown.mat_board_cost > 0.0);
    }

    #[test]
    fn test_stretcher_forcing_raises_total() {
        let mut narrow_ok = QuoteInput {
            width_mm: 500.0,
            height_mm: 500.0,
            profile: Some(oak_profile()),
            work_type: WorkType::StretchedCanvas,
            stretcher: StretcherType::Narrow,
            ..QuoteInput::default()
        };
        let first = compute_quote(&narrow_ok);
        assert_eq!(first.breakdown.stretcher, StretcherType::Narrow);

        narrow_ok.width_mm = 510.0;
        let second = compute_quote(&narrow_ok);
        assert_eq!(second.breakdown.stretcher, StretcherType::Wide);
        assert!(second.total > first.total);
    }

    #[test]
    fn test_invalid_size_returns_warned_zero_quote() {
        let input = QuoteInput {
            width_mm: 10.0,
            height_mm: 10.0,
            profile: Some(oak_profile()),
            ..QuoteInput::default()
        };
        let result = compute_quote(&input);

        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
        assert!(result.warnings.iter().any(|w| w == WARN_BAD_SIZE));
    }

    #[test]
    fn test_missing_profile_keeps_gates_live() {
        let input = QuoteInput {
            width_mm: 200.0,
            height_mm: 200.0,
            ..QuoteInput::default()
        };
        let result = compute_quote(&input);

        assert_eq!(result.total, 0);
        assert!(result.warnings.iter().any(|w| w == WARN_NO_PROFILE));
        // The form still needs the gates and the resolved hanger label.
        assert!(result.breakdown.stand_allowed);
        assert_eq!(result.breakdown.hanger, HangerType::Crocodile);
        assert_eq!(result.effective_width_mm, 200.0);
    }

    #[test]
    fn test_missing_profile_and_bad_size_warn_twice() {
        let result = compute_quote(&QuoteInput::default());
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.effective_width_mm, 0.0);
    }

    #[test]
    fn test_no_item_has_nonpositive_total() {
        // Across a spread of inputs, suppressed items never leak through.
        for work_type in [
            WorkType::Canvas,
            WorkType::StretchedCanvas,
            WorkType::Rhinestone,
            WorkType::Embroidery,
            WorkType::Photo,
        ] {
            let input = QuoteInput {
                width_mm: 400.0,
                height_mm: 600.0,
                profile: Some(oak_profile()),
                work_type,
                ..QuoteInput::default()
            };
            let result = compute_quote(&input);
            assert!(
                result.items.iter().all(|item| item.total > 0),
                "{:?} produced a non-positive line item",
                work_type
            );
        }
    }

    #[test]
    fn test_wide_piece_doubles_crocodile_clip() {
        let input = QuoteInput {
            width_mm: 700.0,
            height_mm: 500.0,
            profile: Some(oak_profile()),
            ..QuoteInput::default()
        };
        let result = compute_quote(&input);

        assert_eq!(result.breakdown.hanging_count, 2);
        assert!((result.breakdown.hanging_cost - 100.0).abs() < 1e-9);
        let hanging = result
            .items
            .iter()
            .find(|item| item.key == LineKey::Hanging)
            .unwrap();
        assert_eq!(hanging.title, "Crocodile clip × 2");
    }

    #[test]
    fn test_wire_hanger_never_doubles() {
        let input = QuoteInput {
            width_mm: 900.0,
            height_mm: 500.0,
            profile: Some(oak_profile()),
            work_type: WorkType::StretchedCanvas,
            ..QuoteInput::default()
        };
        let result = compute_quote(&input);

        assert_eq!(result.breakdown.hanger, HangerType::Wire);
        assert_eq!(result.breakdown.hanging_count, 1);
    }

    #[test]
    fn test_rhinestone_adds_pvc_and_film_items() {
        let input = QuoteInput {
            width_mm: 400.0,
            height_mm: 400.0,
            profile: Some(oak_profile()),
            work_type: WorkType::Rhinestone,
            ..QuoteInput::default()
        };
        let result = compute_quote(&input);

        let item_keys = keys(&result);
        assert!(item_keys.contains(&LineKey::Pvc));
        assert!(item_keys.contains(&LineKey::Film));
        let pvc = result
            .items
            .iter()
            .find(|item| item.key == LineKey::Pvc)
            .unwrap();
        assert_eq!(pvc.title, "PVC backing 3 mm");
    }

    #[test]
    fn test_photo_forces_cardboard_despite_customer_no() {
        let input = QuoteInput {
            width_mm: 400.0,
            height_mm: 400.0,
            profile: Some(oak_profile()),
            work_type: WorkType::Photo,
            back_panel: false,
            ..QuoteInput::default()
        };
        let result = compute_quote(&input);

        assert!(result.breakdown.back_panel);
        assert!(result.breakdown.cardboard_cost > 0.0);
    }

    #[test]
    fn test_stretched_canvas_has_no_cardboard_but_has_bars() {
        let input = QuoteInput {
            width_mm: 400.0,
            height_mm: 400.0,
            profile: Some(oak_profile()),
            work_type: WorkType::StretchedCanvas,
            back_panel: true,
            ..QuoteInput::default()
        };
        let result = compute_quote(&input);

        assert!(!result.breakdown.back_panel);
        assert_eq!(result.breakdown.cardboard_cost, 0.0);
        assert!(keys(&result).contains(&LineKey::Stretcher));
        // Bars size to the raw 400×400 canvas: 1.6 m of narrow bar.
        assert!((result.breakdown.stretcher_cost - 1.6 * 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_stand_included_only_when_gate_allows() {
        let mut input = QuoteInput {
            width_mm: 250.0,
            height_mm: 250.0,
            profile: Some(oak_profile()),
            stand: true,
            ..QuoteInput::default()
        };
        let small = compute_quote(&input);
        assert!(keys(&small).contains(&LineKey::Stand));

        input.width_mm = 400.0;
        let large = compute_quote(&input);
        assert!(!keys(&large).contains(&LineKey::Stand));
        assert_eq!(large.breakdown.stand_cost, 0.0);
    }

    #[test]
    fn test_quantity_multiplies_and_rounds_once() {
        let mut input = plain_canvas_input();
        input.quantity = 3;
        let result = compute_quote(&input);

        // Raw per-piece total is 3049.5; three pieces round once at the end.
        assert_eq!(result.total, 9149);
        let materials = result
            .items
            .iter()
            .find(|item| item.key == LineKey::Materials)
            .unwrap();
        assert_eq!(materials.unit_price, 228); // display value for one piece
        assert_eq!(materials.total, 683); // 682.5 rounded, not 228 × 3
    }

    #[test]
    fn test_garbage_quantity_defaults_to_one() {
        let mut input = plain_canvas_input();
        input.quantity = -5;
        assert_eq!(compute_quote(&input).total, 3050);
    }

    #[test]
    fn test_total_monotonic_in_size() {
        let mut input = plain_canvas_input();
        input.glazing = GlazingType::Glass;
        let base = compute_quote(&input).total;

        input.width_mm += 50.0;
        let wider = compute_quote(&input).total;
        input.height_mm += 50.0;
        let taller = compute_quote(&input).total;

        assert!(wider >= base);
        assert!(taller >= wider);
    }

    #[test]
    fn test_glazing_priced_by_type() {
        let mut input = plain_canvas_input();
        input.glazing = GlazingType::Glass;
        let glass = compute_quote(&input);
        input.glazing = GlazingType::Museum;
        let museum = compute_quote(&input);

        assert!(glass.breakdown.glazing_cost > 0.0);
        assert!(museum.total > glass.total);
    }

    #[test]
    fn test_explicit_price_list_is_honored() {
        let mut prices = PriceList::default();
        prices.crocodile_clip = 500;
        let bumped = compute_quote_with(&plain_canvas_input(), &prices);
        assert_eq!(bumped.total, 3500); // 3049.5 - 50 + 500
    }
}
