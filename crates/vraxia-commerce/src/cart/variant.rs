//! Variant identity.
//!
//! A variant is a product plus one chosen value per option group. The key
//! derived here is the cart ledger's line-item identity, so it must be
//! deterministic and independent of the order options were picked in.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A shopper's chosen option values, keyed by option group name.
///
/// A `BTreeMap` so iteration is always sorted by group name; key derivation
/// gets order-independence from the container rather than from a sort step.
pub type Selection = BTreeMap<String, String>;

/// Separator between the product id and the option pairs, and between pairs.
const PAIR_SEPARATOR: char = '-';
/// Separator between a group name and its chosen value.
const VALUE_SEPARATOR: char = ':';

/// Stable identity of a (product, selection) combination.
///
/// Example: `1-Color:Sand-Size:M`. An empty selection yields the bare
/// product id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey(String);

impl VariantKey {
    /// Derive the key for a product and selection.
    ///
    /// Pure and total: equal (group, value) pair sets always produce equal
    /// keys, regardless of insertion order; any differing pair produces a
    /// different key.
    pub fn resolve(product_id: &ProductId, selection: &Selection) -> Self {
        if selection.is_empty() {
            return Self(product_id.as_str().to_string());
        }

        let mut key = String::from(product_id.as_str());
        for (group, value) in selection {
            key.push(PAIR_SEPARATOR);
            key.push_str(group);
            key.push(VALUE_SEPARATOR);
            key.push_str(value);
        }
        Self(key)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VariantKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
