//! Cart ledger and line item types.

use crate::cart::{Selection, VariantKey};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An insertion-ordered collection of line items, keyed by variant identity.
///
/// The ledger exclusively owns its line items: every mutation goes through
/// the methods here, and quantity updates at or below zero are removals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, in the order they were first added.
    pub items: Vec<LineItem>,
    /// When the ledger last changed.
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Add a product variant to the cart.
    ///
    /// Resolves the variant identity from the product id and selection. The
    /// first add of an identity snapshots the product's *current* price,
    /// title, and primary image; later adds of the same identity only
    /// increase the quantity.
    ///
    /// Fails with [`CommerceError::InvalidQuantity`] when `quantity < 1`.
    pub fn add(
        &mut self,
        product: &Product,
        selection: Selection,
        quantity: i64,
    ) -> Result<VariantKey, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let key = VariantKey::resolve(&product.id, &selection);

        if let Some(existing) = self.items.iter_mut().find(|i| i.key == key) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
        } else {
            self.items.push(LineItem {
                key: key.clone(),
                product_id: product.id.clone(),
                title: product.title.clone(),
                unit_price: product.price,
                image: product.first_image().map(String::from),
                selection,
                quantity,
            });
        }

        self.updated_at = Utc::now();
        Ok(key)
    }

    /// Set a line item's quantity.
    ///
    /// A quantity at or below zero removes the item; that is a defined
    /// outcome, not an error. Returns whether a line item was affected.
    pub fn update_quantity(&mut self, key: &VariantKey, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(key);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.key == key) {
            item.quantity = quantity;
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    /// Remove a line item. Removing an absent identity is a no-op.
    pub fn remove(&mut self, key: &VariantKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.key != key);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Empty the ledger. Used after successful order placement.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = Utc::now();
    }

    /// Sum of unit price times quantity over all line items.
    pub fn subtotal(&self) -> Money {
        let currency = self
            .items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or(Currency::USD);
        self.items.iter().fold(Money::zero(currency), |acc, item| {
            let line = item.line_total();
            acc.try_add(&line).unwrap_or(acc)
        })
    }

    /// Sum of quantities over all line items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct variants in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by variant identity.
    pub fn get(&self, key: &VariantKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key == key)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Variant identity, the ledger key.
    pub key: VariantKey,
    /// Product this line was created from.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price captured at add time; never re-read from the catalog.
    pub unit_price: Money,
    /// Primary product image at add time.
    pub image: Option<String>,
    /// The chosen option values (denormalized for display).
    pub selection: Selection,
    /// Quantity, always positive.
    pub quantity: i64,
}

impl LineItem {
    /// Unit price times quantity. Saturates rather than wrapping.
    pub fn line_total(&self) -> Money {
        self.unit_price
            .try_multiply(self.quantity)
            .unwrap_or(Money::new(i64::MAX, self.unit_price.currency))
    }
}
