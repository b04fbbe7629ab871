//! # Error Types
//!
//! Domain-specific error types for baget-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  baget-core errors (this file)                                         │
//! │  ├── CoreError        - Rejected reference data                        │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  baget-catalog errors (separate crate)                                 │
//! │  └── CatalogError     - File loading / parsing failures                │
//! │                                                                         │
//! │  NOT errors: quote preconditions (bad size, no profile picked).        │
//! │  Those surface as warning strings inside a successful QuoteResult -    │
//! │  the calculator is total over its input domain.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Reference-data errors.
///
/// Raised when catalog data fails validation; the loader decides whether to
/// skip the entry or abort the load.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog profile failed field validation.
    #[error("Catalog profile '{article}' rejected: {source}")]
    ProfileRejected {
        article: String,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProfileRejected {
            article: "OAK-30".to_string(),
            source: ValidationError::MustBePositive {
                field: "price_per_m".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Catalog profile 'OAK-30' rejected: price_per_m must be positive"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "article".to_string(),
        };
        assert_eq!(err.to_string(), "article is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "article".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
