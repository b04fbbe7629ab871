//! # Auto-Addition Rules
//!
//! Maps a work type to the materials and treatments that are mandatory
//! regardless of what the customer toggled on the form.
//!
//! ## The Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Work type        PVC    Film   Cardboard  Re-stretch  Drop cardboard  │
//! │  ───────────────  ─────  ─────  ─────────  ──────────  ──────────────  │
//! │  rhinestone       3mm    yes    -          -           -               │
//! │  embroidery       4mm    -      forced     forced      -               │
//! │  beads            4mm    -      forced     forced      -               │
//! │  photo            3mm    yes    forced     -           -               │
//! │  stretched canvas -      -      -          forced      forced          │
//! │  canvas, other    -      -      -          -           -               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Certain media physically require rigid backing or adhesive mounting to be
//! frameable at all. Encoding that here once means the cost model never has
//! to special-case work types directly, and adding a work type is a one-arm
//! change with exhaustiveness checked by the compiler.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::WorkType;

// =============================================================================
// PVC Grade
// =============================================================================

/// Backing-plastic grade a work type mandates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PvcGrade {
    /// No PVC backing required.
    #[default]
    None,
    /// 3mm sheet - photos and rhinestone mosaics.
    Mm3,
    /// 4mm sheet - embroidery needs the stiffer board.
    Mm4,
}

// =============================================================================
// Auto Additions
// =============================================================================

/// What a work type silently adds to the quote.
///
/// Derived, never stored: always recomputed from the work type so the table
/// below stays the single source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AutoAdditions {
    /// Mandatory backing-plastic grade.
    pub pvc_grade: PvcGrade,

    /// Adhesive-film lamination is mandatory.
    pub adhesive_film: bool,

    /// Cardboard back panel is mandatory even if the customer said no.
    pub force_cardboard: bool,

    /// The piece must be physically (re-)stretched in the workshop.
    /// Priced as a line item only for stretched canvas; for embroidery it
    /// surfaces on the UI as an "included" badge.
    pub force_stretch: bool,

    /// Cardboard back panel is forbidden - stretched canvas never takes one.
    pub remove_cardboard: bool,
}

/// Resolves the mandatory additions for a work type.
///
/// Total function: every work type has a defined row, no error case.
///
/// ## Example
/// ```rust
/// use baget_core::rules::{resolve_auto_additions, PvcGrade};
/// use baget_core::types::WorkType;
///
/// let auto = resolve_auto_additions(WorkType::Photo);
/// assert_eq!(auto.pvc_grade, PvcGrade::Mm3);
/// assert!(auto.adhesive_film);
/// assert!(auto.force_cardboard);
/// ```
pub fn resolve_auto_additions(work_type: WorkType) -> AutoAdditions {
    match work_type {
        WorkType::Rhinestone => AutoAdditions {
            pvc_grade: PvcGrade::Mm3,
            adhesive_film: true,
            force_cardboard: false,
            force_stretch: false,
            remove_cardboard: false,
        },
        WorkType::Embroidery | WorkType::Beads => AutoAdditions {
            pvc_grade: PvcGrade::Mm4,
            adhesive_film: false,
            force_cardboard: true,
            force_stretch: true,
            remove_cardboard: false,
        },
        WorkType::Photo => AutoAdditions {
            pvc_grade: PvcGrade::Mm3,
            adhesive_film: true,
            force_cardboard: true,
            force_stretch: false,
            remove_cardboard: false,
        },
        WorkType::StretchedCanvas => AutoAdditions {
            pvc_grade: PvcGrade::None,
            adhesive_film: false,
            force_cardboard: false,
            force_stretch: true,
            remove_cardboard: true,
        },
        WorkType::Canvas | WorkType::Other => AutoAdditions::default(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
