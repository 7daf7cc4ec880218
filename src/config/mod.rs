//! Configuration loading from config.toml
//!
//! This module provides the application settings and the seed data used to
//! populate the in-memory store at startup. The entities defined in
//! config.toml stand in for the storefront backend this dashboard would
//! normally be fed by.

use crate::{
    entities::{Order, Product, Shipment, Transaction},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Default minimum payout amount in the smallest currency unit.
const DEFAULT_PAYOUT_MINIMUM: i64 = 100_000;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Minimum amount a merchant may withdraw in a single payout
    #[serde(default = "default_payout_minimum")]
    pub payout_minimum: i64,
    /// Seed data for the in-memory store
    #[serde(default)]
    pub store: StoreSeed,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            payout_minimum: DEFAULT_PAYOUT_MINIMUM,
            store: StoreSeed::default(),
        }
    }
}

const fn default_payout_minimum() -> i64 {
    DEFAULT_PAYOUT_MINIMUM
}

/// Seed entities loaded into the store at startup.
///
/// Dates are written as quoted `"YYYY-MM-DD"` strings in the TOML file;
/// statuses use the snake_case names of the entity enums.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct StoreSeed {
    /// Sales balance available for withdrawal
    #[serde(default)]
    pub available_balance: i64,
    /// Catalog products
    #[serde(default)]
    pub products: Vec<Product>,
    /// Customer orders
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Shipments already labelled
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    /// Balance history, newest first
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Loads the application configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing or malformed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the application configuration from `MITRA_CONFIG_PATH`, falling
/// back to `./config.toml`.
///
/// # Errors
/// Returns an error if the resolved file cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path =
        std::env::var("MITRA_CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{OrderStatus, ProductStatus, TransactionKind};

    #[test]
    fn test_parse_store_seed() {
        let toml_str = r#"
            payout_minimum = 100000

            [store]
            available_balance = 2500000

            [[store.products]]
            id = "PRD-001"
            name = "Kopi Gayo 250g"
            sku = "MTR-001"
            price = 85000
            stock = 24
            status = "active"

            [[store.orders]]
            id = "ORD-1042"
            date = "2024-06-01"
            customer = "Rina Wulandari"
            total = 170000
            items = 2
            status = "new"

            [[store.transactions]]
            id = "TRX-204"
            date = "2024-06-01"
            kind = "sale"
            reference = "ORD-1042"
            amount = 170000
            status = "success"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.payout_minimum, 100_000);
        assert_eq!(config.store.available_balance, 2_500_000);

        assert_eq!(config.store.products.len(), 1);
        assert_eq!(config.store.products[0].sku, "MTR-001");
        assert_eq!(config.store.products[0].status, ProductStatus::Active);

        assert_eq!(config.store.orders.len(), 1);
        assert_eq!(config.store.orders[0].status, OrderStatus::New);
        assert_eq!(
            config.store.orders[0].date.format("%Y-%m-%d").to_string(),
            "2024-06-01"
        );

        assert_eq!(config.store.transactions.len(), 1);
        assert_eq!(config.store.transactions[0].kind, TransactionKind::Sale);
        assert!(config.store.shipments.is_empty());
    }

    #[test]
    fn test_payout_minimum_defaults_when_absent() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.payout_minimum, 100_000);
        assert!(config.store.products.is_empty());
    }
}
