//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog trades in a single display currency (USD), so `Price` wraps
//! a bare [`Decimal`] rather than carrying a currency code on every value.
//! Decimal arithmetic keeps totals exact: a $100.00 product at 20% off,
//! quantity 2, comes to exactly $160.00 with no float drift.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary amount in the store's display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount in the standard unit (dollars).
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from the smallest currency unit (cents).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The decimal amount in the standard unit.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The price after applying a percentage discount.
    ///
    /// Percentages above 100 are treated as 100 (a free product).
    #[must_use]
    pub fn discounted(&self, percent: u8) -> Self {
        let percent = percent.min(100);
        Self(self.0 * Decimal::from(100 - percent) / Decimal::ONE_HUNDRED)
    }

    /// The given percentage of this price (e.g. a tax or promo fraction).
    #[must_use]
    pub fn percent_of(&self, percent: u8) -> Self {
        Self(self.0 * Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }

    /// The price multiplied by a unit count.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    /// Saturating subtraction: prices never go below zero.
    fn sub(self, rhs: Self) -> Self {
        Self((self.0 - rhs.0).max(Decimal::ZERO))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    /// Format for display with two decimal places (e.g. `$19.99`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(5999);
        assert_eq!(price.amount(), Decimal::new(5999, 2));
        assert_eq!(price.to_string(), "$59.99");
    }

    #[test]
    fn test_discounted() {
        let price = Price::from_cents(10_000);
        assert_eq!(price.discounted(20), Price::from_cents(8_000));
        assert_eq!(price.discounted(0), price);
        // Over-100% discounts clamp to free
        assert_eq!(price.discounted(150), Price::zero());
    }

    #[test]
    fn test_discount_times_quantity_is_exact() {
        // $100.00 at 20% off, quantity 2 = exactly $160.00
        let subtotal = Price::from_cents(10_000).discounted(20).times(2);
        assert_eq!(subtotal, Price::from_cents(16_000));
    }

    #[test]
    fn test_percent_of() {
        let price = Price::from_cents(5_000);
        assert_eq!(price.percent_of(7), Price::from_cents(350));
    }

    #[test]
    fn test_sub_saturates_at_zero() {
        let small = Price::from_cents(100);
        let large = Price::from_cents(500);
        assert_eq!(small - large, Price::zero());
        assert_eq!(large - small, Price::from_cents(400));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_cents(100), Price::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(350));
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_cents(5999) < Price::from_cents(6999));
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Price::from_cents(12_999);
        let json = serde_json::to_string(&price).unwrap();
        // serde-with-str serializes decimals as strings to preserve precision
        assert_eq!(json, "\"129.99\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
