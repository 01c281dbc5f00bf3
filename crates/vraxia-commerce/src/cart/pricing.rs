//! Checkout pricing.
//!
//! Combines the cart subtotal, an accepted coupon discount, and the
//! shipping-threshold rule into a final quote.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Shipping rule configuration.
///
/// Net totals above `free_shipping_threshold` ship free; anything positive
/// below it pays `flat_shipping_fee`. Empty (or fully discounted) carts ship
/// free trivially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Net total above which shipping is free.
    pub free_shipping_threshold: Money,
    /// Flat fee charged below the threshold.
    pub flat_shipping_fee: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::from_decimal(100.0, Currency::USD),
            flat_shipping_fee: Money::from_decimal(15.0, Currency::USD),
        }
    }
}

impl PricingConfig {
    /// Override the free-shipping threshold.
    pub fn with_threshold(mut self, threshold: Money) -> Self {
        self.free_shipping_threshold = threshold;
        self
    }

    /// Override the flat shipping fee.
    pub fn with_flat_fee(mut self, fee: Money) -> Self {
        self.flat_shipping_fee = fee;
        self
    }

    /// Price a subtotal with an optional accepted discount percentage.
    ///
    /// The discount percentage is 0-100 by construction (coupon validation
    /// enforces it), so the total can never go negative.
    pub fn quote(&self, subtotal: Money, discount_percent: Option<f64>) -> Quote {
        let currency = subtotal.currency;
        let discount = match discount_percent {
            Some(percent) => subtotal.percentage(percent),
            None => Money::zero(currency),
        };

        let after_discount = subtotal.amount_cents - discount.amount_cents;

        let shipping = if after_discount <= 0 {
            Money::zero(currency)
        } else if after_discount > self.free_shipping_threshold.amount_cents {
            Money::zero(currency)
        } else {
            self.flat_shipping_fee
        };

        Quote {
            subtotal,
            discount,
            shipping,
            total: Money::new(after_discount.max(0) + shipping.amount_cents, currency),
        }
    }
}

/// A priced checkout breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Cart subtotal before any discount.
    pub subtotal: Money,
    /// Discount amount taken off the subtotal.
    pub discount: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Amount to charge.
    pub total: Money,
}

impl Quote {
    /// Whether a discount was applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// Whether shipping is free on this quote.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
