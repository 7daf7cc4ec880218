//! Query/filter layer - derives filtered views from the entity lists.
//!
//! Each filter is a stable, side-effect-free transform: the result preserves
//! the relative order of the source list and is a freshly cloned sequence,
//! never a mutation of the source. Matching is case-insensitive substring
//! matching over the entity's searchable fields. A blank query or an absent
//! status filter passes everything through; an unmatched query yields an
//! empty list, not an error.

use crate::entities::{
    Order, OrderStatus, Product, ProductStatus, Shipment, ShipmentStatus, Transaction,
    TransactionKind,
};

/// Case-insensitive substring match of `query` against any of `fields`.
/// A blank query matches everything.
fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Filters products by listing status and free-text query.
///
/// Searchable fields: name and SKU.
#[must_use]
pub fn filter_products(
    products: &[Product],
    status: Option<ProductStatus>,
    query: &str,
) -> Vec<Product> {
    products
        .iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .filter(|p| matches_query(query, &[&p.name, &p.sku]))
        .cloned()
        .collect()
}

/// Filters orders by fulfilment status and free-text query.
///
/// Searchable fields: order id and customer name.
#[must_use]
pub fn filter_orders(orders: &[Order], status: Option<OrderStatus>, query: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| status.is_none_or(|s| o.status == s))
        .filter(|o| matches_query(query, &[&o.id, &o.customer]))
        .cloned()
        .collect()
}

/// Filters shipments by delivery status and free-text query.
///
/// Searchable fields: shipment id, order id, and tracking code.
#[must_use]
pub fn filter_shipments(
    shipments: &[Shipment],
    status: Option<ShipmentStatus>,
    query: &str,
) -> Vec<Shipment> {
    shipments
        .iter()
        .filter(|s| status.is_none_or(|st| s.status == st))
        .filter(|s| matches_query(query, &[&s.id, &s.order_id, &s.tracking_code]))
        .cloned()
        .collect()
}

/// Filters the balance history by transaction kind and free-text query.
///
/// Searchable fields: transaction id and reference.
#[must_use]
pub fn filter_transactions(
    transactions: &[Transaction],
    kind: Option<TransactionKind>,
    query: &str,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| kind.is_none_or(|k| t.kind == k))
        .filter(|t| matches_query(query, &[&t.id, &t.reference]))
        .cloned()
        .collect()
}
