//! # Money Module
//!
//! Provides the `Money` type for handling quoted amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Component costs are genuinely fractional (2.772 m of molding at       │
//! │  1000/m), so the calculator works in f64 internally. But a customer    │
//! │  is quoted a whole number of currency units, and rounding each line    │
//! │  separately drifts once quantity > 1:                                  │
//! │                                                                         │
//! │    round(a) + round(b) ≠ round(a + b)   (off by up to 1 per line)      │
//! │                                                                         │
//! │  OUR SOLUTION: floats stay raw until the very end, then cross into    │
//! │  integer Money exactly once via `Money::from_raw`.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use baget_core::money::Money;
//!
//! // Create from whole currency units
//! let price = Money::from_units(1000); // price per meter of a profile
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_units(350);
//!
//! // The one sanctioned float crossing
//! assert_eq!(Money::from_raw(3049.5).units(), 3050);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A quoted amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for credits/adjustments in the web layer
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Whole units, not cents**: the workshop quotes whole rubles; the
///   sub-unit precision lives in the raw f64 breakdown, not in Money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use baget_core::money::Money;
    ///
    /// let stand = Money::from_units(350);
    /// assert_eq!(stand.units(), 350);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Converts a raw float cost into Money, rounding half away from zero.
    ///
    /// This is the single place fractional component math becomes a quoted
    /// amount. Non-finite input (a hostile or broken caller) collapses to
    /// zero rather than poisoning the quote.
    ///
    /// ## Example
    /// ```rust
    /// use baget_core::money::Money;
    ///
    /// assert_eq!(Money::from_raw(227.5).units(), 228);
    /// assert_eq!(Money::from_raw(227.4).units(), 227);
    /// assert_eq!(Money::from_raw(f64::NAN).units(), 0);
    /// ```
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_finite() {
            Money(raw.round() as i64)
        } else {
            Money(0)
        }
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use baget_core::money::Money;
    ///
    /// let clip = Money::from_units(50);
    /// assert_eq!(clip.multiply_quantity(2).units(), 100);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the dev preview binary. The website formats
/// amounts itself to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ₽", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(1000);
        assert_eq!(money.units(), 1000);
    }

    #[test]
    fn test_from_raw_rounds_half_away_from_zero() {
        assert_eq!(Money::from_raw(3049.5).units(), 3050);
        assert_eq!(Money::from_raw(3049.4).units(), 3049);
        assert_eq!(Money::from_raw(-0.5).units(), -1);
        assert_eq!(Money::from_raw(0.0).units(), 0);
    }

    #[test]
    fn test_from_raw_non_finite_collapses_to_zero() {
        assert_eq!(Money::from_raw(f64::NAN).units(), 0);
        assert_eq!(Money::from_raw(f64::INFINITY).units(), 0);
        assert_eq!(Money::from_raw(f64::NEG_INFINITY).units(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(3050)), "3050 ₽");
        assert_eq!(format!("{}", Money::from_units(0)), "0 ₽");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        let result: Money = a * 3;
        assert_eq!(result.units(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let clip = Money::from_units(50);
        assert_eq!(clip.multiply_quantity(2).units(), 100);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_units(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }

    /// Critical test: rounding once at the end differs from rounding per line.
    /// This documents why the calculator keeps raw floats until the total.
    #[test]
    fn test_round_once_vs_per_line_drift() {
        let lines = [2772.0, 227.5, 50.0];

        let per_line: i64 = lines.iter().map(|&c| Money::from_raw(c).units()).sum();
        let once = Money::from_raw(lines.iter().sum::<f64>()).units();

        // 227.5 rounds up on its own; the sum 3049.5 also rounds up here,
        // so the two happen to agree for this table...
        assert_eq!(once, 3050);
        assert_eq!(per_line, 3050);

        // ...but not once a quantity multiplies the drift.
        let qty = 3;
        let per_line_qty: i64 = lines
            .iter()
            .map(|&c| Money::from_raw(c).multiply_quantity(qty).units())
            .sum();
        let once_qty = Money::from_raw(lines.iter().sum::<f64>() * qty as f64).units();
        assert_eq!(once_qty, 9149); // 9148.5 rounded once
        assert_eq!(per_line_qty, 9150); // drift: per-line rounding overshoots
    }
}
