//! Product entity - Represents catalog items listed by the merchant.
//!
//! Each product has a name, a unique SKU, a unit price, a stock count, and a
//! listing status. Products are never physically deleted; deactivating a
//! product hides it from the storefront while keeping its history intact.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Listing status of a product.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductStatus {
    /// Visible in the storefront and purchasable.
    Active,
    /// Hidden from the storefront.
    Inactive,
}

impl ProductStatus {
    /// Returns the opposite status. Toggling twice restores the original.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// Product catalog model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: String,
    /// Display name shown in the catalog (e.g., "Kopi Gayo 250g")
    pub name: String,
    /// Unique stock-keeping unit code (e.g., `"MTR-001"`)
    pub sku: String,
    /// Unit price in the smallest currency unit, never negative
    pub price: i64,
    /// Units currently in stock
    pub stock: u32,
    /// Listing status
    pub status: ProductStatus,
}
