//! Order lifecycle service.

use std::sync::Arc;

use tracing::{info, warn};
use vraxia_commerce::order::{Order, OrderStats, OrderStatus};
use vraxia_commerce::{CommerceError, OrderId};

use crate::collab::{OrderFilter, OrderRepository, StatusNotifier};
use crate::StorefrontError;

/// Steps placed orders through their fulfillment lifecycle.
///
/// The service computes the target status with the domain state machine and
/// hands it to the repository, which is the authority for serializing
/// concurrent transitions on the same order. A rejected transition changes
/// nothing.
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    notifier: Arc<dyn StatusNotifier>,
}

impl OrderService {
    /// Create an order service.
    pub fn new(orders: Arc<dyn OrderRepository>, notifier: Arc<dyn StatusNotifier>) -> Self {
        Self { orders, notifier }
    }

    /// Take the next forward step: pending, processing, shipped, delivered.
    pub async fn advance(&self, id: &OrderId) -> Result<Order, StorefrontError> {
        self.transition(id, OrderStatus::advance).await
    }

    /// Cancel the order, or refund it if already delivered.
    ///
    /// One entry point for both terminal moves; the branch on current
    /// status is internal, so callers need not know which terminal state is
    /// reachable.
    pub async fn cancel_or_refund(&self, id: &OrderId) -> Result<Order, StorefrontError> {
        self.transition(id, OrderStatus::cancel_or_refund).await
    }

    async fn transition(
        &self,
        id: &OrderId,
        step: fn(OrderStatus) -> Result<OrderStatus, CommerceError>,
    ) -> Result<Order, StorefrontError> {
        let order = self
            .orders
            .find(id)
            .await?
            .ok_or_else(|| StorefrontError::OrderNotFound(id.to_string()))?;

        let target = match step(order.status) {
            Ok(target) => target,
            Err(err) => {
                warn!(order = %id, status = %order.status, "rejected status transition");
                return Err(err.into());
            }
        };

        let updated = self.orders.update_status(id, target).await?;
        self.notifier.status_changed(&updated).await?;

        info!(order = %id, from = %order.status, to = %target, "order status changed");
        Ok(updated)
    }

    /// Fetch one order.
    pub async fn order(&self, id: &OrderId) -> Result<Order, StorefrontError> {
        self.orders
            .find(id)
            .await?
            .ok_or_else(|| StorefrontError::OrderNotFound(id.to_string()))
    }

    /// List orders matching a filter, newest first.
    pub async fn orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, StorefrontError> {
        self.orders.list(filter).await
    }

    /// Aggregate dashboard figures over the orders matching a filter.
    pub async fn stats(&self, filter: &OrderFilter) -> Result<OrderStats, StorefrontError> {
        let orders = self.orders.list(filter).await?;
        Ok(OrderStats::from_orders(&orders))
    }

    /// Delete an order from the system of record.
    pub async fn delete(&self, id: &OrderId) -> Result<(), StorefrontError> {
        self.orders.delete(id).await?;
        info!(order = %id, "order deleted");
        Ok(())
    }
}
