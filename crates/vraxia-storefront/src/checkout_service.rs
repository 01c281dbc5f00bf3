//! Checkout: coupon validation, pricing, and order placement.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use vraxia_commerce::cart::{self, Cart, CouponOutcome, PricingConfig, Quote, RejectReason};
use vraxia_commerce::order::{Order, OrderDraft, OrderLineItem, PaymentProvider, ShippingInfo};
use vraxia_store::KvStore;

use crate::collab::{Coupons, Identity, OrderRepository};
use crate::{CartService, StorefrontError};

/// Everything the caller supplies to place an order.
///
/// The payment reference is recorded verbatim; this core never talks to a
/// payment network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    /// Shipping and contact details.
    pub shipping: ShippingInfo,
    /// Chosen payment provider.
    pub payment_provider: PaymentProvider,
    /// Caller-supplied payment reference.
    pub payment_reference: String,
    /// Coupon code, if the shopper applied one.
    pub coupon_code: Option<String>,
}

/// Turns a cart into a priced, validated, persisted order.
pub struct CheckoutService {
    orders: Arc<dyn OrderRepository>,
    identity: Arc<dyn Identity>,
    coupons: Arc<dyn Coupons>,
    pricing: PricingConfig,
}

impl CheckoutService {
    /// Create a checkout service.
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        identity: Arc<dyn Identity>,
        coupons: Arc<dyn Coupons>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            orders,
            identity,
            coupons,
            pricing,
        }
    }

    /// Validate a coupon code against the coupon source.
    ///
    /// Rejection is an inline outcome for the shopper, never an error. The
    /// empty code short-circuits before any lookup.
    pub async fn validate_coupon(
        &self,
        code: Option<&str>,
    ) -> Result<CouponOutcome, StorefrontError> {
        let raw = code.unwrap_or_default();
        let normalized = cart::normalize_code(raw);
        if normalized.is_empty() {
            return Ok(CouponOutcome::Rejected(RejectReason::Empty));
        }

        let coupon = self.coupons.coupon(&normalized).await?;
        Ok(cart::validate(raw, Utc::now(), |_| coupon.as_ref()))
    }

    /// Price a cart with an optional coupon code.
    ///
    /// Returns the quote alongside the coupon outcome so the caller can
    /// display a rejection inline; a rejected coupon prices as no discount.
    pub async fn quote(
        &self,
        cart: &Cart,
        coupon_code: Option<&str>,
    ) -> Result<(Quote, CouponOutcome), StorefrontError> {
        let outcome = self.validate_coupon(coupon_code).await?;
        let quote = self.pricing.quote(cart.subtotal(), outcome.discount_percent());
        Ok((quote, outcome))
    }

    /// Place an order from the session's cart.
    ///
    /// Requires an authenticated shopper; an anonymous session fails with
    /// [`StorefrontError::AuthRequired`] before anything is read or
    /// written. On success the order snapshot is persisted, the cart is
    /// cleared, and the placed order is returned.
    pub async fn place_order<S: KvStore>(
        &self,
        carts: &CartService<S>,
        request: PlaceOrderRequest,
    ) -> Result<Order, StorefrontError> {
        let user_id = self
            .identity
            .current_user()
            .await?
            .ok_or(StorefrontError::AuthRequired)?;

        let cart = carts.cart()?;
        let (quote, _outcome) = self.quote(&cart, request.coupon_code.as_deref()).await?;

        let draft = OrderDraft {
            user_id,
            items: cart.items.iter().map(OrderLineItem::from).collect(),
            shipping: request.shipping,
            payment_provider: request.payment_provider,
            payment_reference: request.payment_reference,
            total: quote.total,
        };

        let order = self.orders.create(draft).await?;
        carts.clear()?;

        info!(
            order = %order.id,
            user = %order.user_id,
            total = %order.total,
            provider = %order.payment_provider,
            "order placed"
        );
        Ok(order)
    }
}
