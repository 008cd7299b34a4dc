//! # Money Module
//!
//! Provides the `Money` type for rounded monetary results.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE PIPELINE                                                         │
//! │                                                                         │
//! │  line items (f64) ──► subtotal ──► discount ──► tax      (unrounded)   │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                            Money::from_major_rounded  ◄── ONLY HERE    │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                    final price in integer cents        │
//! │                                                                         │
//! │  Intermediate steps stay unrounded so the only rounding error is the  │
//! │  single half-up step at the cent boundary.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_major_rounded(58.799999999).unwrap();
//! assert_eq!(price.cents(), 5880);
//! assert_eq!(price.as_major(), 58.8);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative tax rate can push a total below zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency tag**: the currency travels alongside on the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a major-unit amount to the nearest cent, half-up.
    ///
    /// Ties go towards positive infinity: `0.125 → 0.13`, `-0.125 → -0.12`.
    /// Returns `None` when the amount is not finite or the rounded cent count
    /// does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_rounded(49.0 * 1.2).map(|m| m.cents()), Some(5880));
    /// assert_eq!(Money::from_major_rounded(0.125).map(|m| m.cents()), Some(13));
    /// assert_eq!(Money::from_major_rounded(f64::INFINITY), None);
    /// ```
    pub fn from_major_rounded(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0 + 0.5).floor();

        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
            Some(Money(cents as i64))
        } else {
            None
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in major units, as handed to a currency converter.
    #[inline]
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering with two fraction digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(amount: f64) -> i64 {
        Money::from_major_rounded(amount).unwrap().cents()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.as_major(), 10.99);
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(rounded(10.994), 1099);
        assert_eq!(rounded(10.995000001), 1100);
        assert_eq!(rounded(0.125), 13);
        assert_eq!(rounded(-0.125), -12);
    }

    #[test]
    fn test_rounding_absorbs_float_noise() {
        // 70 × 0.7 × 1.2 is not exactly 58.8 in binary floating point
        let noisy = 70.0 * (1.0 - 0.3) * (1.0 + 0.2);
        assert_eq!(rounded(noisy), 5880);
        assert_eq!(Money::from_cents(rounded(noisy)).as_major(), 58.8);
    }

    #[test]
    fn test_rounding_rejects_unrepresentable_amounts() {
        assert_eq!(Money::from_major_rounded(f64::NAN), None);
        assert_eq!(Money::from_major_rounded(f64::INFINITY), None);
        assert_eq!(Money::from_major_rounded(f64::NEG_INFINITY), None);
        assert_eq!(Money::from_major_rounded(1e20), None);
        assert_eq!(Money::from_major_rounded(-1e20), None);
        assert_eq!(rounded(1e15), 100_000_000_000_000_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-0.05");
    }
}
