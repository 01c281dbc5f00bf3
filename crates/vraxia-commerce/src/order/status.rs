//! Order lifecycle state machine.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment status of a placed order.
///
/// The forward path is `pending -> processing -> shipped -> delivered`, one
/// step at a time. `delivered`, `cancelled`, and `refunded` are terminal:
/// no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing. The sole initial state.
    #[default]
    Pending,
    /// Order confirmed and being prepared.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order delivered. Terminal except for refund.
    Delivered,
    /// Order cancelled before delivery. Terminal.
    Cancelled,
    /// Delivered order refunded. Terminal.
    Refunded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    /// Parse a wire-form status string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            "refunded" => Some(OrderStatus::Refunded),
            _ => None,
        }
    }

    /// Check if no further transition is permitted from this state.
    ///
    /// `delivered` still admits a refund, but never a forward step; it
    /// counts as terminal for the forward path.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Refunded
        )
    }

    /// Check if a cancel is still possible from this state.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped
        )
    }

    /// The next status on the forward path.
    ///
    /// Exactly one step; skipping (e.g. `pending` straight to `delivered`)
    /// is not a sanctioned move. Fails with
    /// [`CommerceError::InvalidTransition`] from any terminal state.
    pub fn advance(self) -> Result<OrderStatus, CommerceError> {
        match self {
            OrderStatus::Pending => Ok(OrderStatus::Processing),
            OrderStatus::Processing => Ok(OrderStatus::Shipped),
            OrderStatus::Shipped => Ok(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Refunded => {
                Err(CommerceError::invalid_transition(self.as_str()))
            }
        }
    }

    /// The terminal status reached by the single cancel-or-refund entry
    /// point: a delivered order refunds, an undelivered order cancels.
    ///
    /// Fails with [`CommerceError::InvalidTransition`] once the order is
    /// already cancelled or refunded; a repeat call never re-succeeds.
    pub fn cancel_or_refund(self) -> Result<OrderStatus, CommerceError> {
        match self {
            OrderStatus::Delivered => Ok(OrderStatus::Refunded),
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped => {
                Ok(OrderStatus::Cancelled)
            }
            OrderStatus::Cancelled | OrderStatus::Refunded => {
                Err(CommerceError::invalid_transition(self.as_str()))
            }
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path_single_steps() {
        assert_eq!(OrderStatus::Pending.advance().unwrap(), OrderStatus::Processing);
        assert_eq!(OrderStatus::Processing.advance().unwrap(), OrderStatus::Shipped);
        assert_eq!(OrderStatus::Shipped.advance().unwrap(), OrderStatus::Delivered);
    }

    #[test]
    fn test_advance_from_terminal_fails() {
        for status in [OrderStatus::Delivered, OrderStatus::Cancelled, OrderStatus::Refunded] {
            assert!(matches!(
                status.advance(),
                Err(CommerceError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_cancel_branch() {
        assert_eq!(OrderStatus::Pending.cancel_or_refund().unwrap(), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::Processing.cancel_or_refund().unwrap(), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::Shipped.cancel_or_refund().unwrap(), OrderStatus::Cancelled);
    }

    #[test]
    fn test_refund_branch_only_from_delivered() {
        assert_eq!(OrderStatus::Delivered.cancel_or_refund().unwrap(), OrderStatus::Refunded);
    }

    #[test]
    fn test_cancel_or_refund_is_not_repeatable() {
        let cancelled = OrderStatus::Pending.cancel_or_refund().unwrap();
        assert!(cancelled.cancel_or_refund().is_err());

        let refunded = OrderStatus::Delivered.cancel_or_refund().unwrap();
        assert!(refunded.cancel_or_refund().is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Refunded.is_terminal());
    }

    #[test]
    fn test_wire_form() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        assert_eq!(OrderStatus::parse("SHIPPED"), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::parse("unknown"), None);
    }
}
