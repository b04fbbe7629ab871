//! # Constraint Resolver
//!
//! Computes the physical gates and the *effective* option set for a quote:
//! what the piece will actually measure once matting is added, which options
//! are legal at that size, and how the customer's toggles collapse into the
//! selections the workshop will really build.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Option Resolution                                  │
//! │                                                                         │
//! │  raw size ──► + matting reveals ──► effective size                     │
//! │                                          │                              │
//! │                    ┌─────────────────────┼─────────────────────┐        │
//! │                    ▼                     ▼                     ▼        │
//! │             stand gate            hanger override       stretcher gate  │
//! │             (≤300mm eff.)         (wire for canvas)     (≤500mm raw)    │
//! │                    │                     │                     │        │
//! │                    ▼                     ▼                     ▼        │
//! │             stand = ask AND gate  backing resolved      narrow → wide   │
//! │                                                                         │
//! │  Every gate is computed even with no profile selected, so the form     │
//! │  can show/hide options before the customer picks a molding.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rules::resolve_auto_additions;
use crate::types::{HangerType, QuoteInput, StretcherType, WorkType};
use crate::validation::is_valid_size;
use crate::{NARROW_STRETCHER_MAX_SIDE_MM, STAND_MAX_SIDE_MM};

// =============================================================================
// Effective Options
// =============================================================================

/// The resolved, buildable option set for one quote input.
///
/// "Effective" means after matting, after the work-type overrides, and after
/// clamping requests the physics disallow. The customer's intent is never
/// silently priced in an illegal state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveOptions {
    /// Outer width the frame must enclose, millimeters.
    pub effective_width_mm: f64,

    /// Outer height the frame must enclose, millimeters.
    pub effective_height_mm: f64,

    /// Both axes are finite and at least the 50mm minimum.
    pub size_valid: bool,

    /// A table stand is physically permitted at the effective size.
    pub stand_allowed: bool,

    /// The narrow stretcher profile is permitted at the raw size.
    pub stretcher_narrow_allowed: bool,

    /// Hanging hardware that will actually be fitted.
    pub hanger: HangerType,

    /// A cardboard back panel will actually be fitted.
    pub back_panel: bool,

    /// Stretcher profile that will actually be used (meaningful only for
    /// stretched canvas; defaults to narrow otherwise).
    pub stretcher: StretcherType,

    /// A stand will actually be included (request AND gate).
    pub stand: bool,
}

/// Matting reveals arrive from a free-form form field; anything non-finite
/// or negative behaves as "no reveal".
fn sanitize_reveal(reveal_mm: f64) -> f64 {
    if reveal_mm.is_finite() && reveal_mm > 0.0 {
        reveal_mm
    } else {
        0.0
    }
}

/// Non-finite dimensions collapse to zero so effective-size math stays
/// best-effort instead of propagating NaN into the UI.
fn sanitize_dimension(dim_mm: f64) -> f64 {
    if dim_mm.is_finite() && dim_mm > 0.0 {
        dim_mm
    } else {
        0.0
    }
}

/// Resolves the constraint gates and effective selections for an input.
///
/// Pure and total: requires no profile, never fails. The calculator calls
/// this internally; the website also calls it directly to drive option
/// visibility before a profile is picked.
pub fn resolve_options(input: &QuoteInput) -> EffectiveOptions {
    let auto = resolve_auto_additions(input.work_type);

    let width = sanitize_dimension(input.width_mm);
    let height = sanitize_dimension(input.height_mm);

    // Matting only ever adds size: twice the side reveal across the width,
    // one side plus one (wider) bottom reveal down the height.
    let (effective_width_mm, effective_height_mm) = if input.matting {
        let side = sanitize_reveal(input.mat_side_mm);
        let bottom = sanitize_reveal(input.mat_bottom_mm);
        (width + 2.0 * side, height + side + bottom)
    } else {
        (width, height)
    };

    let size_valid = is_valid_size(input.width_mm, input.height_mm);

    // The stand judges the matted footprint; the stretcher judges the bare
    // canvas - bars are built to the work, not to the mat opening.
    let stand_allowed = size_valid
        && effective_width_mm <= STAND_MAX_SIDE_MM
        && effective_height_mm <= STAND_MAX_SIDE_MM;
    let stretcher_narrow_allowed =
        width <= NARROW_STRETCHER_MAX_SIDE_MM && height <= NARROW_STRETCHER_MAX_SIDE_MM;

    let is_stretched = input.work_type == WorkType::StretchedCanvas;

    // Stretched canvas hangs on wire and takes no back panel, whatever the
    // form says.
    let hanger = if is_stretched {
        HangerType::Wire
    } else {
        input.hanger.unwrap_or_default()
    };

    let back_panel = if auto.remove_cardboard {
        false
    } else {
        auto.force_cardboard || input.back_panel
    };

    let stretcher = if !is_stretched {
        StretcherType::Narrow
    } else if !stretcher_narrow_allowed {
        StretcherType::Wide
    } else {
        input.stretcher
    };

    EffectiveOptions {
        effective_width_mm,
        effective_height_mm,
        size_valid,
        stand_allowed,
        stretcher_narrow_allowed,
        hanger,
        back_panel,
        stretcher,
        stand: input.stand && stand_allowed,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
