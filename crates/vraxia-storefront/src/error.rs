//! Storefront service error types.

use thiserror::Error;
use vraxia_commerce::CommerceError;
use vraxia_store::StoreError;

/// Errors surfaced by the storefront services.
///
/// Collaborator failures arrive as [`StorefrontError::Upstream`] and are
/// never interpreted here: retry policy, if any, belongs to the
/// collaborator's own client.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Checkout attempted without an authenticated shopper.
    #[error("Authentication required")]
    AuthRequired,

    /// The catalog has no product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No order with this id.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// A domain rule was violated.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The session store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An opaque collaborator failure.
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl StorefrontError {
    /// Wrap an opaque collaborator error.
    pub fn upstream(err: impl std::fmt::Display) -> Self {
        StorefrontError::Upstream(err.to_string())
    }
}
