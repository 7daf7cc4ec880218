//! Product business logic - Handles all product-related operations.
//!
//! This module provides the state transitions for catalog products: toggling
//! the listing status and adding a new product from the add-product form.
//! Products are never physically deleted; an unknown id is a defined no-op
//! rather than an error.

use crate::{
    core::validate::{NewProductForm, validate_new_product},
    entities::{Product, ProductStatus},
    errors::Result,
    store::DashboardStore,
};

/// Prefix of auto-derived SKU codes.
pub const SKU_PREFIX: &str = "MTR";

/// Prefix of auto-derived product ids.
const PRODUCT_ID_PREFIX: &str = "PRD";

/// Flips the listing status of the product with the given id.
///
/// Returns the new status when a product matched. An unknown id leaves the
/// catalog unchanged and returns `None`; callers should only report success
/// when a status is returned.
pub fn toggle_product_status(
    store: &mut DashboardStore,
    product_id: &str,
) -> Option<ProductStatus> {
    let mut new_status = None;
    store.update_product(product_id, |product| {
        product.status = product.status.toggled();
        new_status = Some(product.status);
    });
    new_status
}

/// Validates the add-product form and appends the new product.
///
/// The SKU (and id) are derived from the current catalog length as a
/// zero-padded 3-digit sequence, and the status of a new listing is always
/// [`ProductStatus::Active`]. On a validation failure the catalog is left
/// untouched.
///
/// # Errors
/// Returns the first violated form rule; see
/// [`validate_new_product`](crate::core::validate::validate_new_product).
pub fn add_product(store: &mut DashboardStore, form: &NewProductForm) -> Result<Product> {
    let (price, stock) = validate_new_product(form)?;

    let sequence = store.products().len() + 1;
    let product = Product {
        id: format!("{PRODUCT_ID_PREFIX}-{sequence:03}"),
        name: form.name.trim().to_string(),
        sku: format!("{SKU_PREFIX}-{sequence:03}"),
        price,
        stock,
        status: ProductStatus::Active,
    };

    store.append_product(product.clone());
    Ok(product)
}
