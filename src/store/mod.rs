//! In-memory entity store for the current dashboard session.
//!
//! This module provides the repository the rest of the crate reads from and
//! writes to. All entities live in owned `Vec`s for the lifetime of the
//! session; there is no persistence, so dropping the store drops the data.
//! Mutation goes through explicit update/append operations rather than
//! ambient shared state, keeping every state transition testable.

use crate::{
    config::StoreSeed,
    entities::{Order, Product, Shipment, Transaction},
};

/// Holds every entity list plus the withdrawable sales balance.
///
/// Ordering conventions: products and orders keep their insertion order
/// (oldest first); shipments and transactions are kept newest first, so
/// appends to those lists go to the front.
#[derive(Debug, Default, Clone)]
pub struct DashboardStore {
    products: Vec<Product>,
    orders: Vec<Order>,
    shipments: Vec<Shipment>,
    transactions: Vec<Transaction>,
    available_balance: i64,
}

impl DashboardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated from configuration seed data.
    #[must_use]
    pub fn from_seed(seed: StoreSeed) -> Self {
        Self {
            products: seed.products,
            orders: seed.orders,
            shipments: seed.shipments,
            transactions: seed.transactions,
            available_balance: seed.available_balance,
        }
    }

    /// All products, oldest first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All shipments, newest first.
    #[must_use]
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// Balance history, newest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sales balance currently available for withdrawal.
    #[must_use]
    pub const fn available_balance(&self) -> i64 {
        self.available_balance
    }

    /// Finds a product by id.
    #[must_use]
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Finds an order by id.
    #[must_use]
    pub fn order_by_id(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Finds a shipment by id.
    #[must_use]
    pub fn shipment_by_id(&self, id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|s| s.id == id)
    }

    /// Applies `patch` to the product with the given id.
    ///
    /// Returns `true` if a product matched. An unknown id leaves the list
    /// unchanged and returns `false`; it is not an error.
    pub fn update_product(&mut self, id: &str, patch: impl FnOnce(&mut Product)) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                patch(product);
                true
            }
            None => false,
        }
    }

    /// Applies `patch` to the shipment with the given id.
    ///
    /// Returns `true` if a shipment matched; unknown ids are a no-op.
    pub fn update_shipment(&mut self, id: &str, patch: impl FnOnce(&mut Shipment)) -> bool {
        match self.shipments.iter_mut().find(|s| s.id == id) {
            Some(shipment) => {
                patch(shipment);
                true
            }
            None => false,
        }
    }

    /// Appends a product to the end of the catalog.
    pub fn append_product(&mut self, product: Product) {
        tracing::debug!(id = %product.id, sku = %product.sku, "appending product");
        self.products.push(product);
    }

    /// Inserts a shipment at the front of the list (newest first).
    pub fn prepend_shipment(&mut self, shipment: Shipment) {
        tracing::debug!(id = %shipment.id, tracking = %shipment.tracking_code, "prepending shipment");
        self.shipments.insert(0, shipment);
    }

    /// Inserts a transaction at the front of the history (newest first).
    pub fn prepend_transaction(&mut self, transaction: Transaction) {
        tracing::debug!(id = %transaction.id, amount = transaction.amount, "prepending transaction");
        self.transactions.insert(0, transaction);
    }

    /// Reduces the available balance by `amount`.
    ///
    /// Callers validate sufficiency first; this only records the debit.
    pub fn debit_balance(&mut self, amount: i64) {
        self.available_balance -= amount;
    }
}
