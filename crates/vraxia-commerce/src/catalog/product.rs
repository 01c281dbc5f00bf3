//! Product and option group types.
//!
//! The catalog is external to this core: products are looked up by id at
//! add-to-cart time and never written back.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How an option group is rendered and selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Bare labels (e.g., sizes rendered as text boxes).
    Text,
    /// Labels with a color token (e.g., "Sand" / `#E5E0D6`).
    #[serde(rename = "color")]
    Swatch,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Text => "text",
            OptionKind::Swatch => "color",
        }
    }
}

/// One allowed value inside an option group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    /// Display label, also the value recorded in a cart selection.
    pub label: String,
    /// Color token for swatch values; absent for text values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl OptionValue {
    /// Create a bare text value.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: None,
        }
    }

    /// Create a swatch value with its color token.
    pub fn swatch(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: Some(color.into()),
        }
    }
}

/// A named group of selectable options on a product (e.g., "Color", "Size").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Group name, the key used in cart selections.
    pub name: String,
    /// How the group is rendered.
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Allowed values, in display order.
    pub values: Vec<OptionValue>,
}

impl OptionGroup {
    /// Create a text option group from bare labels.
    pub fn text(name: impl Into<String>, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            kind: OptionKind::Text,
            values: labels.into_iter().map(OptionValue::text).collect(),
        }
    }

    /// Create a swatch option group from (label, color) pairs.
    pub fn swatch(
        name: impl Into<String>,
        values: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: OptionKind::Swatch,
            values: values
                .into_iter()
                .map(|(label, color)| OptionValue::swatch(label, color))
                .collect(),
        }
    }

    /// Whether a label is one of this group's allowed values.
    pub fn allows(&self, label: &str) -> bool {
        self.values.iter().any(|v| v.label == label)
    }
}

/// A product as delivered by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Current price. Captured into the cart at add time; the cart never
    /// re-reads it.
    pub price: Money,
    /// Image URLs, first is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Option groups, in display order.
    #[serde(default)]
    pub options: Vec<OptionGroup>,
    /// Categories, normalized at the catalog boundary.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Long-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a new product with no options or images.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            images: Vec::new(),
            options: Vec::new(),
            categories: Vec::new(),
            stock: 0,
            description: None,
        }
    }

    /// Add an option group.
    pub fn with_option(mut self, group: OptionGroup) -> Self {
        self.options.push(group);
        self
    }

    /// Add an image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// The primary image, if any.
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the product defines any selectable options.
    pub fn has_options(&self) -> bool {
        self.options.iter().any(|g| !g.values.is_empty())
    }

    /// Look up an option group by name.
    pub fn option_group(&self, name: &str) -> Option<&OptionGroup> {
        self.options.iter().find(|g| g.name == name)
    }
}
