//! Catalog module.
//!
//! Read-only product data as delivered by the catalog collaborator, plus
//! the one-shot normalization applied at that boundary.

mod normalize;
mod product;

pub use normalize::normalize_categories;
pub use product::{OptionGroup, OptionKind, OptionValue, Product};
