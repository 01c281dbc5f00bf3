//! Cart sessions, checkout, and order lifecycle services for the Vraxia
//! storefront.
//!
//! This crate wires the domain core to its three external collaborators:
//! a read-only product catalog, an order persistence layer, and an
//! identity provider. The services here own the orchestration — load the
//! cart, validate the coupon, quote the price, place the order, step the
//! lifecycle — while every network-facing concern stays behind a trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use vraxia_storefront::prelude::*;
//!
//! let carts = CartService::new(store, catalog, session);
//! carts.add_item(&product_id, selection, 1).await?;
//!
//! let checkout = CheckoutService::new(repo, identity, coupons, PricingConfig::default());
//! let (quote, outcome) = checkout.quote(&carts.cart()?, Some("SUMMER20")).await?;
//! let order = checkout.place_order(&carts, request).await?;
//! ```

pub mod collab;
pub mod error;

mod cart_service;
mod checkout_service;
mod order_service;

pub use cart_service::CartService;
pub use checkout_service::{CheckoutService, PlaceOrderRequest};
pub use error::StorefrontError;
pub use order_service::OrderService;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart_service::CartService;
    pub use crate::checkout_service::{CheckoutService, PlaceOrderRequest};
    pub use crate::collab::{Catalog, Coupons, Identity, OrderFilter, OrderRepository, StatusNotifier};
    pub use crate::error::StorefrontError;
    pub use crate::order_service::OrderService;
}
