//! # baget-core: Pure Quoting Logic for the Baget Workshop
//!
//! This crate is the **heart** of the framing site. It contains the one part
//! of the product with real rule interactions: the price-quoting engine.
//! Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Baget Site Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Website (separate repo)                      │   │
//! │  │    Quote Form ──► Lead Capture ──► Notifications ──► Payment   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain records in / out                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ baget-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   rules   │  │constraints│  │   quote   │  │   │
//! │  │   │  Profile  │  │ AutoAdds  │  │ gates +   │  │ items +   │  │   │
//! │  │   │  Input    │  │ per work  │  │ overrides │  │ total     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 baget-catalog (File Layer)                      │   │
//! │  │          profile catalog JSON, price list overrides             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogProfile, QuoteInput, enums)
//! - [`money`] - Money type with integer arithmetic (rounding happens once!)
//! - [`pricing`] - The standing price list for auxiliary materials
//! - [`rules`] - Auto-addition table: what each work type silently requires
//! - [`constraints`] - Size gates and effective option resolution
//! - [`quote`] - The quote calculator (line items, total, breakdown)
//! - [`availability`] - Lightweight "enough stock for this perimeter" check
//! - [`validation`] - Catalog entry and input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Total over its domain**: `compute_quote` never panics and never
//!    errors - bad input degrades to a warned, zero-cost result
//! 4. **Round once**: component costs stay fractional; only the grand total
//!    is rounded to a whole currency unit
//!
//! ## Example Usage
//!
//! ```rust
//! use baget_core::quote::compute_quote;
//! use baget_core::types::{QuoteInput, WorkType};
//!
//! let input = QuoteInput {
//!     width_mm: 200.0,
//!     height_mm: 250.0,
//!     work_type: WorkType::Canvas,
//!     ..QuoteInput::default()
//! };
//!
//! // No profile selected yet: zero total, a warning, but the option gates
//! // in the breakdown are already live for the UI.
//! let result = compute_quote(&input);
//! assert_eq!(result.total, 0);
//! assert!(!result.warnings.is_empty());
//! assert!(result.breakdown.stand_allowed);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod constraints;
pub mod error;
pub mod money;
pub mod pricing;
pub mod quote;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use baget_core::Money` instead of
// `use baget_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::PriceList;
pub use quote::{compute_quote, compute_quote_with, QuoteResult};
pub use rules::{resolve_auto_additions, AutoAdditions};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum legal work size per axis, in millimeters.
///
/// ## Business Reason
/// The workshop cannot miter a frame around anything smaller than a
/// postcard edge; the site also uses this to reject obvious typos.
pub const MIN_WORK_SIZE_MM: f64 = 50.0;

/// Maximum effective side length (matting included) for a table stand.
///
/// ## Business Reason
/// The lightweight stand tips over under larger pieces. The gate uses the
/// *effective* size because matting adds real weight and leverage.
pub const STAND_MAX_SIDE_MM: f64 = 300.0;

/// Maximum raw side length for the narrow stretcher-bar profile.
///
/// ## Business Reason
/// Past 500mm a narrow bar bows under canvas tension; larger canvases get
/// the wide profile whether the customer asked for it or not.
pub const NARROW_STRETCHER_MAX_SIDE_MM: f64 = 500.0;

/// Effective width above which a crocodile clip is doubled.
///
/// Workshop practice: one clip lets wide pieces tilt. The 600mm figure is
/// the shop's own cutoff for crocodile clips specifically; it does not
/// transfer to other hardware.
pub const DOUBLE_CLIP_MIN_WIDTH_MM: f64 = 600.0;

/// Waste allowance applied to molding length.
///
/// ## Business Reason
/// Offcuts from cutting stock sticks to size are unavoidable; the shop
/// prices 5% of the length as scrap.
pub const WASTE_FACTOR: f64 = 1.05;

/// Extra molding consumed by the four mitered corners, in profile widths.
///
/// Each 45° corner eats roughly two profile widths of stick, so the full
/// frame adds eight on top of the plain perimeter.
pub const MITER_ALLOWANCE_WIDTHS: f64 = 8.0;
