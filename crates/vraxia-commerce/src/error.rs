//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// Coupon rejection is deliberately *not* here: an invalid coupon is an
/// expected outcome with its own result type ([`crate::cart::CouponOutcome`]),
/// not an error to propagate.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Non-positive quantity on add-to-cart.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Illegal order lifecycle move.
    #[error("Invalid status transition from {from}")]
    InvalidTransition {
        /// Status the order was in when the transition was attempted.
        from: String,
    },

    /// Arithmetic overflow in money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}

impl CommerceError {
    /// Build an [`CommerceError::InvalidTransition`] from a status wire name.
    pub fn invalid_transition(from: impl Into<String>) -> Self {
        CommerceError::InvalidTransition { from: from.into() }
    }
}
