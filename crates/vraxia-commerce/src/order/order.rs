//! Order types.
//!
//! An order is a snapshot: line items and total are copied out of the cart
//! at placement time and never re-linked to live cart state. Only the
//! status changes afterwards.

use crate::cart::{LineItem, Selection};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId, UserId};
use crate::money::Money;
use crate::order::{OrderStatus, PaymentProvider};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shipping and contact details collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
}

/// A line item frozen into an order at placement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Product the line was created from.
    pub product_id: ProductId,
    /// Title at placement time.
    pub title: String,
    /// Unit price at placement time.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: i64,
    /// The chosen option values.
    pub selection: Selection,
    /// Primary image at placement time.
    pub image: Option<String>,
}

impl From<&LineItem> for OrderLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            title: item.title.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            selection: item.selection.clone(),
            image: item.image.clone(),
        }
    }
}

/// Everything the persistence collaborator needs to create an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// The authenticated shopper.
    pub user_id: UserId,
    /// Snapshot of the cart's line items.
    pub items: Vec<OrderLineItem>,
    /// Shipping and contact details.
    pub shipping: ShippingInfo,
    /// Chosen payment provider.
    pub payment_provider: PaymentProvider,
    /// Caller-supplied payment reference.
    pub payment_reference: String,
    /// Quoted amount to charge.
    pub total: Money,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// The shopper who placed it.
    pub user_id: UserId,
    /// Line-item snapshot; immutable after placement.
    pub items: Vec<OrderLineItem>,
    /// Shipping and contact details.
    pub shipping: ShippingInfo,
    /// Chosen payment provider.
    pub payment_provider: PaymentProvider,
    /// Payment reference recorded at placement.
    pub payment_reference: String,
    /// Amount charged; immutable after placement.
    pub total: Money,
    /// Fulfillment status, the only mutable field.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Materialize a draft into a pending order.
    pub fn from_draft(id: OrderId, draft: OrderDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: draft.user_id,
            items: draft.items,
            shipping: draft.shipping,
            payment_provider: draft.payment_provider,
            payment_reference: draft.payment_reference,
            total: draft.total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Take the next forward step. Rejection leaves the order untouched.
    pub fn advance(&mut self) -> Result<OrderStatus, CommerceError> {
        let next = self.status.advance()?;
        self.status = next;
        self.updated_at = Utc::now();
        Ok(next)
    }

    /// Cancel, or refund if already delivered. Rejection leaves the order
    /// untouched.
    pub fn cancel_or_refund(&mut self) -> Result<OrderStatus, CommerceError> {
        let next = self.status.cancel_or_refund()?;
        self.status = next;
        self.updated_at = Utc::now();
        Ok(next)
    }
}

/// Aggregate figures over a set of orders, for the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    /// Number of orders.
    pub total_orders: usize,
    /// Sum of order totals.
    pub total_revenue: Money,
    /// Orders still pending.
    pub pending_orders: usize,
    /// Orders delivered.
    pub completed_orders: usize,
}

impl OrderStats {
    /// Compute stats over a slice of orders.
    pub fn from_orders(orders: &[Order]) -> Self {
        let currency = orders
            .first()
            .map(|o| o.total.currency)
            .unwrap_or_default();
        let total_revenue = orders.iter().fold(Money::zero(currency), |acc, o| {
            acc.try_add(&o.total).unwrap_or(acc)
        });
        Self {
            total_orders: orders.len(),
            total_revenue,
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            completed_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Delivered)
                .count(),
        }
    }
}
