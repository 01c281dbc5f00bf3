//! External collaborator traits.
//!
//! The core consumes three collaborators — catalog, persistence, identity —
//! plus a notification sink for status changes. All of them are awaitable
//! and possibly failing; their errors surface as
//! [`StorefrontError::Upstream`](crate::StorefrontError::Upstream) and are
//! not interpreted here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vraxia_commerce::cart::Coupon;
use vraxia_commerce::catalog::Product;
use vraxia_commerce::order::{Order, OrderDraft, OrderStatus};
use vraxia_commerce::{OrderId, ProductId, UserId};

use crate::StorefrontError;

/// Read-only product lookup.
///
/// Consulted only at add-to-cart time to snapshot price, title, and image.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch a product by id. `None` when the catalog has no such product.
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, StorefrontError>;
}

/// Coupon definitions, looked up by normalized code.
#[async_trait]
pub trait Coupons: Send + Sync {
    /// Fetch a coupon by its normalized (upper-case) code.
    async fn coupon(&self, code: &str) -> Result<Option<Coupon>, StorefrontError>;
}

/// Filter for order listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Restrict to one shopper's orders.
    pub user_id: Option<UserId>,
    /// Restrict to one status.
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    /// Match every order.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a shopper.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Restrict to a status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether an order passes this filter.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(user_id) = &self.user_id {
            if &order.user_id != user_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        true
    }
}

/// Order persistence, the system of record.
///
/// The lifecycle machine computes the *target* status; this trait's
/// implementor owns serialization of concurrent transitions (a
/// compare-and-set or row lock on the status field).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a draft as a new pending order.
    async fn create(&self, draft: OrderDraft) -> Result<Order, StorefrontError>;

    /// Fetch an order by id.
    async fn find(&self, id: &OrderId) -> Result<Option<Order>, StorefrontError>;

    /// Persist a new status for an order and return the updated record.
    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, StorefrontError>;

    /// List orders matching a filter, newest first.
    async fn list(&self, filter: &OrderFilter) -> Result<Vec<Order>, StorefrontError>;

    /// Delete an order.
    async fn delete(&self, id: &OrderId) -> Result<(), StorefrontError>;
}

/// The authentication collaborator.
#[async_trait]
pub trait Identity: Send + Sync {
    /// The current shopper, or `None` for an anonymous session.
    async fn current_user(&self) -> Result<Option<UserId>, StorefrontError>;
}

/// Sink for status-change events.
///
/// Fired after every successful lifecycle transition; the transport is the
/// implementor's concern.
#[async_trait]
pub trait StatusNotifier: Send + Sync {
    /// An order's status changed; `order` carries the new status.
    async fn status_changed(&self, order: &Order) -> Result<(), StorefrontError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use vraxia_commerce::money::{Currency, Money};
    use vraxia_commerce::order::{PaymentProvider, ShippingInfo};

    fn order_for(user: &str, status: OrderStatus) -> Order {
        let mut order = Order::from_draft(
            OrderId::generate(),
            OrderDraft {
                user_id: UserId::new(user),
                items: Vec::new(),
                shipping: ShippingInfo {
                    full_name: "A".into(),
                    email: "a@example.com".into(),
                    phone: "1".into(),
                    country: "US".into(),
                    city: "NYC".into(),
                    address: "1 Main".into(),
                },
                payment_provider: PaymentProvider::Stripe,
                payment_reference: "ref".into(),
                total: Money::zero(Currency::USD),
            },
        );
        order.status = status;
        order
    }

    #[test]
    fn test_filter_matches() {
        let order = order_for("u1", OrderStatus::Pending);

        assert!(OrderFilter::all().matches(&order));
        assert!(OrderFilter::for_user(UserId::new("u1")).matches(&order));
        assert!(!OrderFilter::for_user(UserId::new("u2")).matches(&order));
        assert!(OrderFilter::all().with_status(OrderStatus::Pending).matches(&order));
        assert!(!OrderFilter::all().with_status(OrderStatus::Shipped).matches(&order));
    }
}
