//! # Availability Checker
//!
//! The lighter sibling of the quote calculator: "does this profile have
//! enough linear stock for that perimeter?" Used by the public catalog page
//! as a coarse in-stock signal, long before a priced quote exists.
//!
//! No corner or waste allowance here - that precision belongs to the priced
//! quote, not to a stock badge.

/// Plain perimeter of a work in millimeters.
///
/// ## Example
/// ```rust
/// use baget_core::availability::required_perimeter;
///
/// assert_eq!(required_perimeter(500.0, 700.0), 2400.0);
/// ```
#[inline]
pub fn required_perimeter(width_mm: f64, height_mm: f64) -> f64 {
    2.0 * (width_mm + height_mm)
}

/// Whether a profile's available stock length covers a required length.
///
/// `required` is `None` while the visitor has not finished entering
/// dimensions; an unknown requirement is never "suitable".
///
/// ## Example
/// ```rust
/// use baget_core::availability::is_profile_suitable;
///
/// assert!(is_profile_suitable(3000.0, Some(2400.0)));
/// assert!(!is_profile_suitable(2000.0, Some(2400.0)));
/// assert!(!is_profile_suitable(3000.0, None));
/// ```
pub fn is_profile_suitable(available_length: f64, required: Option<f64>) -> bool {
    match required {
        Some(required_length) => available_length >= required_length,
        None => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_perimeter() {
        assert_eq!(required_perimeter(500.0, 700.0), 2400.0);
        assert_eq!(required_perimeter(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_suitability_boundary() {
        // Exactly enough stock counts as suitable.
        assert!(is_profile_suitable(2400.0, Some(2400.0)));
        assert!(!is_profile_suitable(2399.9, Some(2400.0)));
    }

    #[test]
    fn test_unknown_requirement_is_never_suitable() {
        assert!(!is_profile_suitable(10_000.0, None));
    }
}
