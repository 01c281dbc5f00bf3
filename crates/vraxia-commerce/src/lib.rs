//! Commerce domain types and logic for the Vraxia storefront.
//!
//! This crate holds the pieces of the store that have to be exactly right:
//!
//! - **Catalog**: read-only product data with option groups (text and swatch)
//! - **Cart**: variant identity, the line-item ledger, coupons, pricing
//! - **Orders**: the placed-order snapshot and its fulfillment lifecycle
//!
//! # Example
//!
//! ```rust,ignore
//! use vraxia_commerce::prelude::*;
//!
//! let product = Product::new("1", "Structured Linen Chore Coat", Money::from_decimal(185.0, Currency::USD));
//!
//! let mut cart = Cart::new();
//! let mut selection = Selection::new();
//! selection.insert("Color".into(), "Sand".into());
//! selection.insert("Size".into(), "M".into());
//! cart.add(&product, selection, 1)?;
//!
//! let quote = PricingConfig::default().quote(cart.subtotal(), None);
//! println!("Total: {}", quote.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod order;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{normalize_categories, OptionGroup, OptionKind, OptionValue, Product};

    // Cart
    pub use crate::cart::{
        Cart, Coupon, CouponOutcome, LineItem, PricingConfig, Quote, RejectReason, Selection,
        VariantKey,
    };

    // Orders
    pub use crate::order::{
        Order, OrderDraft, OrderLineItem, OrderStats, OrderStatus, PaymentProvider, ShippingInfo,
    };
}
