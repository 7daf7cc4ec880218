//! Shipment entity - Represents parcels handed to a courier for delivery.
//!
//! A shipment is created by the shipping-label generator and references its
//! order by id. The tracking code follows the format `RESI-NNNN-CCC` where
//! `NNNN` is a 4-digit number and `CCC` is the courier's fixed 3-letter code.
//! Delivered is terminal; a shipment never reverts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Couriers the store can hand parcels to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Courier {
    /// JNE Express
    #[strum(serialize = "JNE")]
    Jne,
    /// SiCepat Ekspres
    #[strum(serialize = "SiCepat")]
    Sicepat,
    /// J&T Express
    #[strum(serialize = "J&T")]
    Jnt,
}

impl Courier {
    /// Fixed 3-letter code embedded in tracking numbers.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Jne => "JNE",
            Self::Sicepat => "SCP",
            Self::Jnt => "JNT",
        }
    }
}

/// Delivery status of a shipment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShipmentStatus {
    /// Label printed, waiting for courier pickup.
    AwaitingPickup,
    /// Picked up and on its way.
    InTransit,
    /// Received by the customer. Terminal.
    Delivered,
}

/// Shipment model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Unique identifier for the shipment (e.g., `"SHP-4821"`)
    pub id: String,
    /// Id of the order this shipment fulfils
    pub order_id: String,
    /// Courier carrying the parcel
    pub courier: Courier,
    /// Waybill tracking code, format `RESI-NNNN-CCC`
    pub tracking_code: String,
    /// Estimated delivery date, never before the creation date
    pub eta: NaiveDate,
    /// Delivery status
    pub status: ShipmentStatus,
}
