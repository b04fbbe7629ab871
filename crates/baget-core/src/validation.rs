//! # Validation Module
//!
//! Input validation utilities for the quoting engine.
//!
//! ## Two Kinds of "Invalid"
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Strategy                                │
//! │                                                                         │
//! │  Quote preconditions (size, missing profile)                           │
//! │  ├── NEVER errors - the calculator degrades to a warned zero quote     │
//! │  └── helpers: is_valid_size, clamp_quantity                            │
//! │                                                                         │
//! │  Catalog reference data (profiles from the CMS export)                 │
//! │  ├── typed ValidationError per field                                   │
//! │  └── baget-catalog skips bad entries and logs them                     │
//! │                                                                         │
//! │  A broken CMS row must not take the quote page down.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::CatalogProfile;
use crate::MIN_WORK_SIZE_MM;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quote Precondition Helpers
// =============================================================================

/// A work size is quotable when both axes are finite and at least 50mm.
///
/// ## Example
/// ```rust
/// use baget_core::validation::is_valid_size;
///
/// assert!(is_valid_size(500.0, 700.0));
/// assert!(!is_valid_size(10.0, 700.0));
/// assert!(!is_valid_size(f64::NAN, 700.0));
/// ```
pub fn is_valid_size(width_mm: f64, height_mm: f64) -> bool {
    width_mm.is_finite()
        && height_mm.is_finite()
        && width_mm >= MIN_WORK_SIZE_MM
        && height_mm >= MIN_WORK_SIZE_MM
}

/// Quantity from the form, clamped to a sane positive count.
///
/// Zero, negative, or absent (serde default) all mean "one piece".
#[inline]
pub fn clamp_quantity(quantity: i64) -> i64 {
    quantity.max(1)
}

// =============================================================================
// Catalog Entry Validators
// =============================================================================

/// Validates an article code (the business identifier on the stock stick).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_article(article: &str) -> ValidationResult<()> {
    let article = article.trim();

    if article.is_empty() {
        return Err(ValidationError::Required {
            field: "article".to_string(),
        });
    }

    if article.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "article".to_string(),
            max: 50,
        });
    }

    if !article
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "article".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a profile display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_profile_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a per-meter price.
///
/// ## Rules
/// - Must be positive: a free molding is a data-entry mistake, and a quote
///   built on it would silently drop the baget line item
pub fn validate_price(price_per_m: i64) -> ValidationResult<()> {
    if price_per_m <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price_per_m".to_string(),
        });
    }

    Ok(())
}

/// Validates a profile face width in millimeters.
///
/// ## Rules
/// - Must be finite and positive
/// - At most 200mm - nothing wider fits the workshop's miter saw
pub fn validate_profile_width(width_mm: f64) -> ValidationResult<()> {
    if !width_mm.is_finite() || width_mm <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "width_mm".to_string(),
        });
    }

    if width_mm > 200.0 {
        return Err(ValidationError::OutOfRange {
            field: "width_mm".to_string(),
            min: 1,
            max: 200,
        });
    }

    Ok(())
}

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use baget_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

/// Validates a whole catalog profile entry.
///
/// Used by the catalog loader; the first failing field wins.
pub fn validate_profile(profile: &CatalogProfile) -> ValidationResult<()> {
    validate_uuid(&profile.id)?;
    validate_article(&profile.article)?;
    validate_profile_name(&profile.name)?;
    validate_profile_width(profile.width_mm)?;
    validate_price(profile.price_per_m)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
