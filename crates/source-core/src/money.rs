//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! `DiscountPercent` wrapper for percentage discounts.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Discounted prices are not whole currency units:                        │
//! │    ₹350 at 15% off = ₹297.50 exactly                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals                                           │
//! │    Every aggregation step keeps full precision.                         │
//! │    Rounding happens ONCE, at display time, never inside the engine.     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use source_core::money::{DiscountPercent, Money};
//!
//! let price = Money::from_major(350);
//! let discount = DiscountPercent::new(15).unwrap();
//!
//! let effective = price.less_discount(discount);
//! assert_eq!(effective.to_string(), "₹297.5");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in currency units.
///
/// ## Design Decisions
/// - **Exact decimal**: effective prices carry fractional units and must
///   aggregate without loss
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **Derives**: full serde support; serialized as a string for the UI
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use source_core::money::Money;
    ///
    /// let price = Money::from_major(180); // ₹180
    /// assert_eq!(price.to_string(), "₹180");
    /// ```
    #[inline]
    pub fn from_major(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// Keeps full precision: ₹350 at 15% off is exactly ₹297.50, not a
    /// rounded approximation.
    ///
    /// ## Example
    /// ```rust
    /// use source_core::money::{DiscountPercent, Money};
    ///
    /// let price = Money::from_major(180);
    /// let ten_off = DiscountPercent::new(10).unwrap();
    /// assert_eq!(price.less_discount(ten_off), Money::from_major(162));
    /// ```
    pub fn less_discount(&self, discount: DiscountPercent) -> Money {
        Money(self.0 * discount.remainder_fraction())
    }

    /// Returns the amount removed by a percentage discount.
    pub fn discount_amount(&self, discount: DiscountPercent) -> Money {
        Money(self.0 * discount.fraction())
    }

    /// Rounds to the given number of decimal places, half away from zero.
    ///
    /// Display-time rounding only. The engine never calls this internally;
    /// presentation code rounds exactly once, after all aggregation.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use source_core::money::Money;
    ///
    /// let total = Money::new(Decimal::new(6215, 1)); // ₹621.5
    /// assert_eq!(total.rounded(0), Money::from_major(622));
    /// ```
    pub fn rounded(&self, decimals: u32) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}₹{}", sign, self.0.abs().normalize())
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

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Summation over line values (empty iterator sums to zero).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Discount Percent
// =============================================================================

/// A percentage discount in whole percent, validated to 0-100.
///
/// ## Why a Wrapper?
/// The 0-100 range is an invariant of every catalog record and offer.
/// Construction is the validation boundary; pricing arithmetic downstream
/// assumes the range holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(try_from = "u32", into = "u32")]
#[ts(export)]
pub struct DiscountPercent(u32);

impl DiscountPercent {
    /// Creates a discount from whole percent, rejecting values over 100.
    ///
    /// ## Example
    /// ```rust
    /// use source_core::money::DiscountPercent;
    ///
    /// assert!(DiscountPercent::new(15).is_ok());
    /// assert!(DiscountPercent::new(101).is_err());
    /// ```
    pub fn new(percent: u32) -> Result<Self, ValidationError> {
        if percent > 100 {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: 100,
            });
        }
        Ok(DiscountPercent(percent))
    }

    /// Zero discount.
    #[inline]
    pub const fn none() -> Self {
        DiscountPercent(0)
    }

    /// Returns the discount in whole percent.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0
    }

    /// Checks if no discount applies.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// The discount as a fraction (10% → 0.10). Exact, no division.
    #[inline]
    pub fn fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// The remaining fraction after discount (10% → 0.90). Exact.
    #[inline]
    pub fn remainder_fraction(&self) -> Decimal {
        Decimal::new(i64::from(100 - self.0), 2)
    }
}

impl TryFrom<u32> for DiscountPercent {
    type Error = ValidationError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        DiscountPercent::new(percent)
    }
}

impl From<DiscountPercent> for u32 {
    fn from(discount: DiscountPercent) -> u32 {
        discount.0
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(180);
        assert_eq!(money.amount(), Decimal::from(180));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_major(180)), "₹180");
        assert_eq!(format!("{}", Money::new(Decimal::new(2975, 1))), "₹297.5");
        assert_eq!(format!("{}", Money::from_major(-50)), "-₹50");
        assert_eq!(format!("{}", Money::zero()), "₹0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(100);
        let b = Money::from_major(40);

        assert_eq!(a + b, Money::from_major(140));
        assert_eq!(a - b, Money::from_major(60));
        assert_eq!(a * 3, Money::from_major(300));

        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_major(140));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_less_discount_keeps_full_precision() {
        let price = Money::from_major(350);
        let discount = DiscountPercent::new(15).unwrap();

        let effective = price.less_discount(discount);
        assert_eq!(effective.amount(), Decimal::new(2975, 1)); // 297.5 exactly
    }

    #[test]
    fn test_discount_amount() {
        let price = Money::from_major(180);
        let discount = DiscountPercent::new(10).unwrap();

        assert_eq!(price.discount_amount(discount), Money::from_major(18));
    }

    #[test]
    fn test_rounded_half_away_from_zero() {
        let value = Money::new(Decimal::new(2975, 1)); // 297.5
        assert_eq!(value.rounded(0), Money::from_major(298));

        let value = Money::new(Decimal::new(1624, 1)); // 162.4
        assert_eq!(value.rounded(0), Money::from_major(162));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_major(1);
        assert!(positive.is_positive());

        let negative = Money::from_major(-1);
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), positive);
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert_eq!(total, Money::zero());
    }

    #[test]
    fn test_discount_percent_range() {
        assert!(DiscountPercent::new(0).is_ok());
        assert!(DiscountPercent::new(100).is_ok());
        assert!(DiscountPercent::new(101).is_err());
    }

    #[test]
    fn test_discount_fractions() {
        let discount = DiscountPercent::new(10).unwrap();
        assert_eq!(discount.fraction(), Decimal::new(10, 2));
        assert_eq!(discount.remainder_fraction(), Decimal::new(90, 2));

        let full = DiscountPercent::new(100).unwrap();
        assert_eq!(full.remainder_fraction(), Decimal::ZERO);
    }

    #[test]
    fn test_discount_percent_serde_rejects_out_of_range() {
        let ok: Result<DiscountPercent, _> = serde_json::from_str("15");
        assert_eq!(ok.unwrap().percent(), 15);

        let err: Result<DiscountPercent, _> = serde_json::from_str("250");
        assert!(err.is_err());
    }
}
