//! Shopping cart module.
//!
//! Contains variant identity, the line-item ledger, coupon validation, and
//! pricing.

mod cart;
mod coupon;
mod pricing;
mod variant;

pub use cart::{Cart, LineItem};
pub use coupon::{normalize_code, validate, Coupon, CouponOutcome, RejectReason};
pub use pricing::{PricingConfig, Quote};
pub use variant::{Selection, VariantKey};
