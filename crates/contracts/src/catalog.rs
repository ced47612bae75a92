//! Data contracts for the product catalog.
//!
//! The catalog is served as a static JSON array (`data/products.json`);
//! records are immutable after fetch and carry no identity beyond their
//! position in the array.

use serde::{Deserialize, Serialize};

/// One product card worth of data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,

    pub description: String,

    /// Pre-formatted price text (e.g. "1.500.000 ₡"), rendered as-is.
    pub price: String,

    /// Category key used by the filter engine ("producto", "viaje", ...).
    #[serde(rename = "type")]
    pub category: String,

    /// Image URL, relative or absolute.
    pub image: String,
}
