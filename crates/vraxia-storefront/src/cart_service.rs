//! Session-scoped cart service.

use std::sync::Arc;

use tracing::{debug, info};
use vraxia_commerce::cart::{Cart, Selection, VariantKey};
use vraxia_commerce::{Money, ProductId};
use vraxia_store::{cart_key, KvStore, SessionId};

use crate::collab::Catalog;
use crate::StorefrontError;

/// The cart ledger for one shopper session.
///
/// Each mutation is an atomic read-modify-write against the session store,
/// so the ledger survives a process restart. Carts are never shared across
/// sessions; no further locking discipline is needed.
pub struct CartService<S> {
    store: S,
    catalog: Arc<dyn Catalog>,
    session: SessionId,
}

impl<S: KvStore> CartService<S> {
    /// Create a service bound to one session.
    pub fn new(store: S, catalog: Arc<dyn Catalog>, session: SessionId) -> Self {
        Self {
            store,
            catalog,
            session,
        }
    }

    /// The session this service is bound to.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Load the session's cart; a session with no stored cart is empty.
    pub fn cart(&self) -> Result<Cart, StorefrontError> {
        Ok(self
            .store
            .get::<Cart>(&cart_key(&self.session))?
            .unwrap_or_default())
    }

    fn save(&self, cart: &Cart) -> Result<(), StorefrontError> {
        self.store.set(&cart_key(&self.session), cart)?;
        Ok(())
    }

    /// Add a product variant to the cart.
    ///
    /// Looks the product up in the catalog to snapshot its current price,
    /// title, and image; the ledger merges quantity on an existing variant
    /// identity.
    pub async fn add_item(
        &self,
        product_id: &ProductId,
        selection: Selection,
        quantity: i64,
    ) -> Result<VariantKey, StorefrontError> {
        let product = self
            .catalog
            .product(product_id)
            .await?
            .ok_or_else(|| StorefrontError::ProductNotFound(product_id.to_string()))?;

        let mut cart = self.cart()?;
        let key = cart.add(&product, selection, quantity)?;
        self.save(&cart)?;

        info!(
            session = %self.session,
            variant = %key,
            quantity,
            "added item to cart"
        );
        Ok(key)
    }

    /// Set a line item's quantity; zero or below removes the line.
    pub fn update_quantity(
        &self,
        key: &VariantKey,
        quantity: i64,
    ) -> Result<bool, StorefrontError> {
        let mut cart = self.cart()?;
        let changed = cart.update_quantity(key, quantity);
        if changed {
            self.save(&cart)?;
            debug!(session = %self.session, variant = %key, quantity, "updated quantity");
        }
        Ok(changed)
    }

    /// Remove a line item. Removing an absent identity is a no-op.
    pub fn remove(&self, key: &VariantKey) -> Result<bool, StorefrontError> {
        let mut cart = self.cart()?;
        let removed = cart.remove(key);
        if removed {
            self.save(&cart)?;
            debug!(session = %self.session, variant = %key, "removed item");
        }
        Ok(removed)
    }

    /// Empty the cart.
    pub fn clear(&self) -> Result<(), StorefrontError> {
        let mut cart = self.cart()?;
        cart.clear();
        self.save(&cart)?;
        debug!(session = %self.session, "cleared cart");
        Ok(())
    }

    /// The cart subtotal.
    pub fn subtotal(&self) -> Result<Money, StorefrontError> {
        Ok(self.cart()?.subtotal())
    }

    /// Sum of quantities across the cart.
    pub fn item_count(&self) -> Result<i64, StorefrontError> {
        Ok(self.cart()?.item_count())
    }
}
