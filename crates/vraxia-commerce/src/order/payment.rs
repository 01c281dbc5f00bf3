//! Payment provider tags.
//!
//! The core records which provider the shopper chose and a caller-supplied
//! payment reference. It never talks to a payment network.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of accepted payment providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProvider {
    /// Card payments.
    Stripe,
    Paypal,
    GooglePay,
    ApplePay,
}

impl PaymentProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentProvider::Stripe => "stripe",
            PaymentProvider::Paypal => "paypal",
            PaymentProvider::GooglePay => "google_pay",
            PaymentProvider::ApplePay => "apple_pay",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentProvider::Stripe => "Credit Card",
            PaymentProvider::Paypal => "PayPal",
            PaymentProvider::GooglePay => "Google Pay",
            PaymentProvider::ApplePay => "Apple Pay",
        }
    }

    /// Parse a wire-form provider tag.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stripe" => Some(PaymentProvider::Stripe),
            "paypal" => Some(PaymentProvider::Paypal),
            "google_pay" => Some(PaymentProvider::GooglePay),
            "apple_pay" => Some(PaymentProvider::ApplePay),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
