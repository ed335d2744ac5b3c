//! # Money Module
//!
//! Provides the `Money` type for order totals and report revenue.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing a day of REAL totals in SQL:                                   │
//! │    SUM(0.1 + 0.2 + ...) = 15.000000000000002  ❌ WRONG!                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Orders store total_cents INTEGER                                    │
//! │    SUM(total_cents) is exact, AVG is rounded once to whole cents       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::Money;
//!
//! let burger = Money::from_cents(1099); // $10.99
//! let fries = Money::from_cents(350); // $3.50
//! assert_eq!((burger + fries).cents(), 1449);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Average of `self` spread over `count` items, rounded half away from zero.
    ///
    /// Returns zero when `count` is zero, matching the "no orders, no average"
    /// reporting rule.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1500).average_over(2).cents(), 750);
    /// assert_eq!(Money::from_cents(1000).average_over(3).cents(), 333);
    /// assert_eq!(Money::from_cents(500).average_over(0).cents(), 0);
    /// ```
    pub fn average_over(&self, count: i64) -> Money {
        if count == 0 {
            return Money::zero();
        }
        let num = (self.0 as i128).abs();
        let den = (count as i128).abs();
        // (2n + d) / 2d == round-half-up of n / d for non-negative n, d
        let magnitude = ((num * 2 + den) / (den * 2)) as i64;
        if (self.0 < 0) != (count < 0) {
            Money(-magnitude)
        } else {
            Money(magnitude)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and the seed report. Frontends format with locale rules.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(750)), "$7.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_sum_of_order_totals() {
        let totals = [1000, 2000, 500].map(Money::from_cents);
        let revenue: Money = totals.into_iter().sum();
        assert_eq!(revenue.cents(), 3500);
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        // 1001 / 2 = 500.5 → 501
        assert_eq!(Money::from_cents(1001).average_over(2).cents(), 501);
        // 1000 / 3 = 333.33 → 333
        assert_eq!(Money::from_cents(1000).average_over(3).cents(), 333);
        // 2000 / 3 = 666.67 → 667
        assert_eq!(Money::from_cents(2000).average_over(3).cents(), 667);
        // -1001 / 2 = -500.5 → -501
        assert_eq!(Money::from_cents(-1001).average_over(2).cents(), -501);
    }

    #[test]
    fn test_average_over_zero_is_zero() {
        assert!(Money::from_cents(1234).average_over(0).is_zero());
    }
}
