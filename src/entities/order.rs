//! Order entity - Represents customer orders placed against the store.
//!
//! Orders arrive from the storefront already priced and itemized; this view
//! only reads them. Status is a closed set and is not transitioned here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Fulfilment status of an order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    /// Just placed, not yet acknowledged by the merchant.
    New,
    /// Acknowledged and being prepared.
    Processing,
    /// Handed to a courier.
    Shipped,
    /// Received by the customer.
    Completed,
    /// Cancelled before fulfilment.
    Cancelled,
}

/// Order model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for the order (e.g., `"ORD-1042"`)
    pub id: String,
    /// Date the order was placed
    pub date: NaiveDate,
    /// Name of the ordering customer
    pub customer: String,
    /// Order total in the smallest currency unit, never negative
    pub total: i64,
    /// Number of line items in the order
    pub items: u32,
    /// Fulfilment status
    pub status: OrderStatus,
}
