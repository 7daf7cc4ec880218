//! Overview generation business logic.
//!
//! This module derives the home-tab summary from the store: balance, settled
//! sales, order and shipment counts, and catalog health. All functions are
//! presentation-agnostic and return structured data the shell can format, plus
//! a few plain-text helpers for logs and confirmation messages.

use crate::{
    entities::{OrderStatus, ProductStatus, ShipmentStatus, TransactionKind, TransactionStatus},
    store::DashboardStore,
};

/// Stock count at or below which a product counts as low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Aggregated numbers for the dashboard home tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Sales balance available for withdrawal
    pub available_balance: i64,
    /// Sum of settled sale transactions
    pub gross_sales: i64,
    /// Orders not yet acknowledged
    pub new_orders: usize,
    /// Orders being prepared
    pub processing_orders: usize,
    /// Products visible in the storefront
    pub active_products: usize,
    /// Products at or below the low-stock threshold
    pub low_stock_products: usize,
    /// Labelled shipments waiting for courier pickup
    pub awaiting_pickup: usize,
    /// Shipments on their way
    pub in_transit: usize,
}

/// Derives the home-tab summary from the current store contents.
#[must_use]
pub fn summarize(store: &DashboardStore) -> DashboardSummary {
    let gross_sales = store
        .transactions()
        .iter()
        .filter(|t| t.kind == TransactionKind::Sale && t.status == TransactionStatus::Success)
        .map(|t| t.amount)
        .sum();

    DashboardSummary {
        available_balance: store.available_balance(),
        gross_sales,
        new_orders: store
            .orders()
            .iter()
            .filter(|o| o.status == OrderStatus::New)
            .count(),
        processing_orders: store
            .orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Processing)
            .count(),
        active_products: store
            .products()
            .iter()
            .filter(|p| p.status == ProductStatus::Active)
            .count(),
        low_stock_products: store
            .products()
            .iter()
            .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
            .count(),
        awaiting_pickup: store
            .shipments()
            .iter()
            .filter(|s| s.status == ShipmentStatus::AwaitingPickup)
            .count(),
        in_transit: store
            .shipments()
            .iter()
            .filter(|s| s.status == ShipmentStatus::InTransit)
            .count(),
    }
}

/// Formats an amount in the smallest currency unit as rupiah, with dot
/// thousands separators.
///
/// # Returns
/// Formatted string like `"Rp2.500.000"` or `"-Rp150.000"`
#[must_use]
pub fn format_amount(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}Rp{grouped}")
}

/// Formats a summary into a human-readable multi-line block.
/// This is useful for logging or plain-text rendering of the home tab.
#[must_use]
pub fn format_summary(summary: &DashboardSummary) -> String {
    use std::fmt::Write;

    let mut out = String::from("Dashboard Overview\n");

    // write! is infallible when writing to String, so unwrap is safe
    writeln!(
        out,
        "  Balance: {} | Settled sales: {}",
        format_amount(summary.available_balance),
        format_amount(summary.gross_sales)
    )
    .unwrap();
    writeln!(
        out,
        "  Orders: {} new | {} processing",
        summary.new_orders, summary.processing_orders
    )
    .unwrap();
    writeln!(
        out,
        "  Catalog: {} active | {} low on stock",
        summary.active_products, summary.low_stock_products
    )
    .unwrap();
    writeln!(
        out,
        "  Shipments: {} awaiting pickup | {} in transit",
        summary.awaiting_pickup, summary.in_transit
    )
    .unwrap();

    out
}
