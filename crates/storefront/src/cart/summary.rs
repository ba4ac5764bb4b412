//! Order summary math: shipping, tax, and promo codes.
//!
//! The breakdown mirrors what the cart page shows next to the checkout
//! button. Checkout itself is out of scope; the summary is the last
//! number the storefront core is responsible for.

use serde::Serialize;
use thiserror::Error;

use stridewell_core::Price;

/// Orders with a subtotal above this ship free.
const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 100_00;

/// Flat shipping charge below the free-shipping threshold.
const FLAT_SHIPPING_CENTS: i64 = 10_00;

/// Sales tax percentage applied to the subtotal.
const TAX_PERCENT: u8 = 7;

/// Subtotal percentage taken off by [`PromoCode::TenPercentOff`].
const PROMO_PERCENT: u8 = 10;

/// A recognized promotional code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoCode {
    /// `SHOES10`: 10% off the subtotal.
    TenPercentOff,
    /// `FREESHIP`: waives the shipping charge.
    FreeShipping,
}

impl PromoCode {
    /// Parse a user-entered code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::UnknownCode`] for anything unrecognized.
    pub fn parse(code: &str) -> Result<Self, PromoError> {
        match code.trim().to_lowercase().as_str() {
            "shoes10" => Ok(Self::TenPercentOff),
            "freeship" => Ok(Self::FreeShipping),
            _ => Err(PromoError::UnknownCode(code.trim().to_string())),
        }
    }
}

/// Recoverable promo code failure, shown inline by the cart page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoError {
    /// The code is not one we issue.
    #[error("Invalid promo code: {0}")]
    UnknownCode(String),
    /// `FREESHIP` on an order that already ships free.
    #[error("Shipping is already free for this order")]
    ShippingAlreadyFree,
}

/// Cost breakdown for the current cart contents.
///
/// Constructed only by [`OrderSummary::for_subtotal`], so the parts always
/// reconcile: `total == subtotal + shipping + tax - discount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderSummary {
    subtotal: Price,
    shipping: Price,
    tax: Price,
    discount: Price,
    total: Price,
}

impl OrderSummary {
    /// Compute the breakdown for a subtotal, optionally applying a promo
    /// code.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::ShippingAlreadyFree`] when `FREESHIP` is
    /// applied to an order above the free-shipping threshold.
    pub fn for_subtotal(subtotal: Price, promo: Option<PromoCode>) -> Result<Self, PromoError> {
        let shipping = if subtotal > Price::from_cents(FREE_SHIPPING_THRESHOLD_CENTS) {
            Price::zero()
        } else {
            Price::from_cents(FLAT_SHIPPING_CENTS)
        };
        let tax = subtotal.percent_of(TAX_PERCENT);

        let discount = match promo {
            None => Price::zero(),
            Some(PromoCode::TenPercentOff) => subtotal.percent_of(PROMO_PERCENT),
            Some(PromoCode::FreeShipping) => {
                if shipping.is_zero() {
                    return Err(PromoError::ShippingAlreadyFree);
                }
                shipping
            }
        };

        Ok(Self {
            subtotal,
            shipping,
            tax,
            discount,
            total: subtotal + shipping + tax - discount,
        })
    }

    /// Sum of line totals before shipping and tax.
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.subtotal
    }

    /// Shipping charge; zero above the free-shipping threshold.
    #[must_use]
    pub const fn shipping(&self) -> Price {
        self.shipping
    }

    /// Sales tax on the subtotal.
    #[must_use]
    pub const fn tax(&self) -> Price {
        self.tax
    }

    /// Promo discount; zero when no code is applied.
    #[must_use]
    pub const fn discount(&self) -> Price {
        self.discount
    }

    /// Grand total: subtotal + shipping + tax - discount.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_shipping_below_threshold() {
        let summary = OrderSummary::for_subtotal(Price::from_cents(50_00), None).unwrap();
        assert_eq!(summary.shipping(), Price::from_cents(10_00));
        assert_eq!(summary.tax(), Price::from_cents(3_50));
        assert_eq!(summary.total(), Price::from_cents(63_50));
    }

    #[test]
    fn test_free_shipping_above_threshold() {
        let summary = OrderSummary::for_subtotal(Price::from_cents(150_00), None).unwrap();
        assert_eq!(summary.shipping(), Price::zero());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly $100.00 still pays shipping; the threshold is "above"
        let summary = OrderSummary::for_subtotal(Price::from_cents(100_00), None).unwrap();
        assert_eq!(summary.shipping(), Price::from_cents(10_00));
    }

    #[test]
    fn test_ten_percent_promo() {
        let summary = OrderSummary::for_subtotal(
            Price::from_cents(80_00),
            Some(PromoCode::TenPercentOff),
        )
        .unwrap();
        assert_eq!(summary.discount(), Price::from_cents(8_00));
        // 80.00 + 10.00 + 5.60 - 8.00
        assert_eq!(summary.total(), Price::from_cents(87_60));
    }

    #[test]
    fn test_freeship_promo_waives_shipping() {
        let summary = OrderSummary::for_subtotal(
            Price::from_cents(80_00),
            Some(PromoCode::FreeShipping),
        )
        .unwrap();
        assert_eq!(summary.discount(), Price::from_cents(10_00));
    }

    #[test]
    fn test_freeship_rejected_when_already_free() {
        let err = OrderSummary::for_subtotal(
            Price::from_cents(150_00),
            Some(PromoCode::FreeShipping),
        )
        .unwrap_err();
        assert_eq!(err, PromoError::ShippingAlreadyFree);
    }

    #[test]
    fn test_promo_parse() {
        assert_eq!(
            PromoCode::parse("SHOES10").unwrap(),
            PromoCode::TenPercentOff
        );
        assert_eq!(
            PromoCode::parse(" freeship ").unwrap(),
            PromoCode::FreeShipping
        );
        assert!(matches!(
            PromoCode::parse("BOGUS"),
            Err(PromoError::UnknownCode(_))
        ));
    }

    #[test]
    fn test_parts_reconcile() {
        let summary = OrderSummary::for_subtotal(Price::from_cents(42_37), None).unwrap();
        assert_eq!(
            summary.total(),
            summary.subtotal() + summary.shipping() + summary.tax() - summary.discount()
        );
    }
}
