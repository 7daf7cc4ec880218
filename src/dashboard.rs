//! Dashboard facade - the operations the shell invokes.
//!
//! Wires the in-memory store, the application configuration, the random
//! source, and the notification side channel together. Every mutating
//! operation validates first, mutates all-or-nothing, and reports its
//! outcome through the notifier; queries delegate to the filter layer.
//! Navigation is expressed as returned [`NavTarget`] values so the actual
//! routing stays with the embedding shell.

use crate::{
    config::AppConfig,
    core::{
        overview::{self, DashboardSummary},
        payout, product, query,
        shipment::{self, DeliveryUpdate},
        validate::{LabelRequest, NewProductForm, PayoutForm},
    },
    entities::{
        Order, OrderStatus, Product, ProductStatus, Shipment, ShipmentStatus, Transaction,
        TransactionKind,
    },
    errors::Result,
    notify::{Notification, Notifier},
    store::DashboardStore,
};
use chrono::{NaiveDate, Utc};
use rand::Rng;

/// Destination the shell should route to on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Open the detail view of one order.
    OrderDetail {
        /// Id of the order to show
        order_id: String,
    },
    /// Leave the dashboard for the public storefront.
    Storefront,
}

/// A merchant dashboard session.
///
/// Generic over the random source (so label generation is deterministic
/// under test) and the notifier (so feedback can be rendered anywhere).
#[derive(Debug)]
pub struct Dashboard<R, N> {
    config: AppConfig,
    store: DashboardStore,
    rng: R,
    notifier: N,
}

impl<R: Rng, N: Notifier> Dashboard<R, N> {
    /// Creates a session with the store seeded from configuration.
    pub fn new(config: AppConfig, rng: R, notifier: N) -> Self {
        let store = DashboardStore::from_seed(config.store.clone());
        Self {
            config,
            store,
            rng,
            notifier,
        }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &DashboardStore {
        &self.store
    }

    /// Read access to the notifier, e.g. to drain recorded messages.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Products filtered by status and free-text query.
    #[must_use]
    pub fn products(&self, status: Option<ProductStatus>, search: &str) -> Vec<Product> {
        query::filter_products(self.store.products(), status, search)
    }

    /// Orders filtered by status and free-text query.
    #[must_use]
    pub fn orders(&self, status: Option<OrderStatus>, search: &str) -> Vec<Order> {
        query::filter_orders(self.store.orders(), status, search)
    }

    /// Shipments filtered by status and free-text query, newest first.
    #[must_use]
    pub fn shipments(&self, status: Option<ShipmentStatus>, search: &str) -> Vec<Shipment> {
        query::filter_shipments(self.store.shipments(), status, search)
    }

    /// Balance history filtered by kind and free-text query, newest first.
    #[must_use]
    pub fn transactions(&self, kind: Option<TransactionKind>, search: &str) -> Vec<Transaction> {
        query::filter_transactions(self.store.transactions(), kind, search)
    }

    /// The derived home-tab summary.
    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        overview::summarize(&self.store)
    }

    /// Flips the listing status of a product and confirms the change.
    ///
    /// An unknown id is a silent no-op: nothing changes and nothing is
    /// notified.
    pub fn toggle_product(&mut self, product_id: &str) -> Option<ProductStatus> {
        let status = product::toggle_product_status(&mut self.store, product_id);
        if let Some(status) = status {
            self.notifier.notify(Notification::success(format!(
                "Product {product_id} is now {status}"
            )));
        }
        status
    }

    /// Validates the add-product form and appends the new product.
    ///
    /// # Errors
    /// Returns the first violated form rule; the rejection is also reported
    /// through the notifier and the catalog is left untouched.
    pub fn add_product(&mut self, form: &NewProductForm) -> Result<Product> {
        match product::add_product(&mut self.store, form) {
            Ok(added) => {
                self.notifier.notify(Notification::success(format!(
                    "Product '{}' added with SKU {}",
                    added.name, added.sku
                )));
                Ok(added)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Generates a shipping label preview without saving it.
    ///
    /// The caller shows the candidate shipment and commits it with
    /// [`Self::save_shipping_label`] once confirmed.
    ///
    /// # Errors
    /// Returns the first violated form rule; the rejection is also reported
    /// through the notifier.
    pub fn create_shipping_label(&mut self, request: &LabelRequest) -> Result<Shipment> {
        match shipment::generate_label(&mut self.rng, Self::today(), request) {
            Ok(candidate) => Ok(candidate),
            Err(e) => {
                self.notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Commits a previewed shipment to the front of the list and confirms.
    pub fn save_shipping_label(&mut self, candidate: Shipment) {
        let message = format!(
            "Label {} saved for order {}",
            candidate.tracking_code, candidate.order_id
        );
        shipment::save_shipment(&mut self.store, candidate);
        self.notifier.notify(Notification::success(message));
    }

    /// Marks a shipment delivered, confirming only an actual transition.
    ///
    /// Re-marking an already-delivered shipment is a no-op with no second
    /// confirmation; an unknown id is a silent no-op.
    pub fn mark_shipment_delivered(&mut self, shipment_id: &str) -> DeliveryUpdate {
        let outcome = shipment::mark_shipment_delivered(&mut self.store, shipment_id);
        if outcome == DeliveryUpdate::Delivered {
            self.notifier.notify(Notification::success(format!(
                "Shipment {shipment_id} marked delivered"
            )));
        }
        outcome
    }

    /// Validates and settles a payout request.
    ///
    /// On success the balance is debited, the payout lands in the history,
    /// and the confirmation names the processing window so the merchant
    /// knows when to expect the funds.
    ///
    /// # Errors
    /// Returns the first violated rule; the rejection is also reported
    /// through the notifier and no state changes.
    pub fn submit_payout(&mut self, form: &PayoutForm) -> Result<Transaction> {
        match payout::submit_payout(
            &mut self.store,
            self.config.payout_minimum,
            form,
            Self::today(),
        ) {
            Ok(transaction) => {
                self.notifier.notify(Notification::success(format!(
                    "Payout of {} submitted. Funds arrive in {}.",
                    overview::format_amount(-transaction.amount),
                    payout::PROCESSING_WINDOW
                )));
                Ok(transaction)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Requests navigation to an order's detail view.
    ///
    /// Returns `None` when the order does not exist.
    #[must_use]
    pub fn open_order_detail(&self, order_id: &str) -> Option<NavTarget> {
        self.store.order_by_id(order_id).map(|order| NavTarget::OrderDetail {
            order_id: order.id.clone(),
        })
    }

    /// Requests navigation back to the public storefront.
    #[must_use]
    pub const fn exit_to_storefront(&self) -> NavTarget {
        NavTarget::Storefront
    }
}
