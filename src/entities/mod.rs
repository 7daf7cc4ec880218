//! Entity module - Contains the plain data models held by the in-memory
//! store. Each entity is an owned value type; entities reference each other
//! by id string only, never by direct links.

pub mod order;
pub mod product;
pub mod shipment;
pub mod transaction;

// Re-export the models and their status enums for convenient use
pub use order::{Order, OrderStatus};
pub use product::{Product, ProductStatus};
pub use shipment::{Courier, Shipment, ShipmentStatus};
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
