//! Shared test utilities for the dashboard crate.
//!
//! This module provides a small seeded store and form builders with sensible
//! defaults, so tests across the crate agree on one fixture.

use crate::{
    config::{AppConfig, StoreSeed},
    core::validate::{LabelRequest, NewProductForm, PayoutForm},
    entities::{
        Courier, Order, OrderStatus, Product, ProductStatus, Shipment, ShipmentStatus,
        Transaction, TransactionKind, TransactionStatus,
    },
    store::DashboardStore,
};
use chrono::NaiveDate;

/// Builds a calendar date, panicking on invalid input (test-only).
#[allow(clippy::unwrap_used)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Three catalog products: two active, one inactive, one low on stock.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "PRD-001".to_string(),
            name: "Kopi Gayo 250g".to_string(),
            sku: "MTR-001".to_string(),
            price: 85_000,
            stock: 24,
            status: ProductStatus::Active,
        },
        Product {
            id: "PRD-002".to_string(),
            name: "Madu Hutan 500ml".to_string(),
            sku: "MTR-002".to_string(),
            price: 125_000,
            stock: 3,
            status: ProductStatus::Active,
        },
        Product {
            id: "PRD-003".to_string(),
            name: "Keripik Singkong".to_string(),
            sku: "MTR-003".to_string(),
            price: 18_000,
            stock: 40,
            status: ProductStatus::Inactive,
        },
    ]
}

/// Three orders: one new, one processing, one completed.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-1042".to_string(),
            date: date(2024, 6, 1),
            customer: "Rina Wulandari".to_string(),
            total: 170_000,
            items: 2,
            status: OrderStatus::New,
        },
        Order {
            id: "ORD-1043".to_string(),
            date: date(2024, 6, 1),
            customer: "Budi Santoso".to_string(),
            total: 625_000,
            items: 5,
            status: OrderStatus::Processing,
        },
        Order {
            id: "ORD-1044".to_string(),
            date: date(2024, 5, 28),
            customer: "Dewi Lestari".to_string(),
            total: 95_000,
            items: 1,
            status: OrderStatus::Completed,
        },
    ]
}

/// Two shipments, newest first: one in transit, one already delivered.
pub fn sample_shipments() -> Vec<Shipment> {
    vec![
        Shipment {
            id: "SHP-4821".to_string(),
            order_id: "ORD-1041".to_string(),
            courier: Courier::Jne,
            tracking_code: "RESI-4821-JNE".to_string(),
            eta: date(2024, 6, 6),
            status: ShipmentStatus::InTransit,
        },
        Shipment {
            id: "SHP-3310".to_string(),
            order_id: "ORD-1038".to_string(),
            courier: Courier::Sicepat,
            tracking_code: "RESI-3310-SCP".to_string(),
            eta: date(2024, 5, 27),
            status: ShipmentStatus::Delivered,
        },
    ]
}

/// Four history entries, newest first: a settled payout, two settled sales,
/// and one sale still pending.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TRX-203".to_string(),
            date: date(2024, 6, 2),
            kind: TransactionKind::Payout,
            reference: "BNI ****2201".to_string(),
            amount: -500_000,
            status: TransactionStatus::Success,
        },
        Transaction {
            id: "TRX-202".to_string(),
            date: date(2024, 6, 1),
            kind: TransactionKind::Sale,
            reference: "ORD-1043".to_string(),
            amount: 625_000,
            status: TransactionStatus::Success,
        },
        Transaction {
            id: "TRX-201".to_string(),
            date: date(2024, 6, 1),
            kind: TransactionKind::Sale,
            reference: "ORD-1042".to_string(),
            amount: 170_000,
            status: TransactionStatus::Success,
        },
        Transaction {
            id: "TRX-200".to_string(),
            date: date(2024, 5, 30),
            kind: TransactionKind::Sale,
            reference: "ORD-1040".to_string(),
            amount: 95_000,
            status: TransactionStatus::Pending,
        },
    ]
}

/// The standard seed: sample lists plus a 2.5M available balance.
pub fn sample_seed() -> StoreSeed {
    StoreSeed {
        available_balance: 2_500_000,
        products: sample_products(),
        orders: sample_orders(),
        shipments: sample_shipments(),
        transactions: sample_transactions(),
    }
}

/// An `AppConfig` carrying the standard seed and the default payout minimum.
pub fn sample_config() -> AppConfig {
    AppConfig {
        payout_minimum: 100_000,
        store: sample_seed(),
    }
}

/// A store populated from the standard seed.
pub fn sample_store() -> DashboardStore {
    DashboardStore::from_seed(sample_seed())
}

/// An extra in-transit shipment for append tests.
pub fn sample_shipment(id: &str, order_id: &str) -> Shipment {
    Shipment {
        id: id.to_string(),
        order_id: order_id.to_string(),
        courier: Courier::Jnt,
        tracking_code: "RESI-7777-JNT".to_string(),
        eta: date(2024, 6, 8),
        status: ShipmentStatus::AwaitingPickup,
    }
}

/// An add-product form with every field as typed.
pub fn product_form(name: &str, price: &str, stock: &str) -> NewProductForm {
    NewProductForm {
        name: name.to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
    }
}

/// A payout form with valid bank details and the given amount.
pub fn payout_form(amount: &str) -> PayoutForm {
    PayoutForm {
        amount: amount.to_string(),
        bank: "BCA".to_string(),
        account_number: "1234567890".to_string(),
        account_name: "Rina Wulandari".to_string(),
    }
}

/// A label form for the given order.
pub fn label_request(
    order_id: &str,
    courier: Option<Courier>,
    weight_grams: Option<u32>,
) -> LabelRequest {
    LabelRequest {
        order_id: order_id.to_string(),
        courier,
        weight_grams,
    }
}
