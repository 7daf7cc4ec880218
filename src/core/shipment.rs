//! Shipment business logic - label generation and delivery transitions.
//!
//! Label generation is split into two steps: [`generate_label`] produces a
//! candidate shipment without touching the store, so the caller can preview
//! it, and [`save_shipment`] commits it to the front of the shipment list.
//! The random source is injected so tracking numbers and ETAs are
//! deterministic under test.

use crate::{
    core::validate::{LabelRequest, validate_label_request},
    entities::{Shipment, ShipmentStatus},
    errors::Result,
    store::DashboardStore,
};
use chrono::{Days, NaiveDate};
use rand::Rng;

/// Prefix of every generated tracking code.
pub const TRACKING_PREFIX: &str = "RESI";

/// Inclusive range of the random 4-digit tracking number.
const TRACKING_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1000..=9999;

/// Inclusive range of transit days used for the ETA estimate.
const TRANSIT_DAYS_RANGE: std::ops::RangeInclusive<u64> = 2..=5;

/// Outcome of a mark-delivered request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryUpdate {
    /// The shipment was advanced to delivered.
    Delivered,
    /// The shipment was already delivered; nothing changed.
    AlreadyDelivered,
    /// No shipment with that id exists; nothing changed.
    NotFound,
}

/// Validates the label form and produces a candidate shipment.
///
/// The tracking code is `RESI-NNNN-CCC` with `NNNN` drawn uniformly from
/// 1000..=9999 and `CCC` the courier's fixed code; the ETA is `today` plus a
/// uniform 2..=5 whole days, as a calendar date. The result is **not**
/// saved; pass it to [`save_shipment`] to commit it.
///
/// # Errors
/// Returns the first violated form rule; see
/// [`validate_label_request`](crate::core::validate::validate_label_request).
pub fn generate_label<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    request: &LabelRequest,
) -> Result<Shipment> {
    let (courier, _weight_grams) = validate_label_request(request)?;

    let number = rng.gen_range(TRACKING_NUMBER_RANGE);
    let transit_days = rng.gen_range(TRANSIT_DAYS_RANGE);

    Ok(Shipment {
        id: format!("SHP-{number}"),
        order_id: request.order_id.trim().to_string(),
        courier,
        tracking_code: format!("{TRACKING_PREFIX}-{number}-{}", courier.code()),
        eta: today + Days::new(transit_days),
        status: ShipmentStatus::AwaitingPickup,
    })
}

/// Commits a generated shipment to the front of the list (newest first).
pub fn save_shipment(store: &mut DashboardStore, shipment: Shipment) {
    store.prepend_shipment(shipment);
}

/// Marks the shipment with the given id as delivered.
///
/// Delivered is terminal: re-marking an already-delivered shipment changes
/// nothing and reports [`DeliveryUpdate::AlreadyDelivered`], so callers can
/// avoid emitting a second confirmation. An unknown id is a defined no-op.
pub fn mark_shipment_delivered(store: &mut DashboardStore, shipment_id: &str) -> DeliveryUpdate {
    match store.shipment_by_id(shipment_id).map(|s| s.status) {
        None => DeliveryUpdate::NotFound,
        Some(ShipmentStatus::Delivered) => DeliveryUpdate::AlreadyDelivered,
        Some(_) => {
            store.update_shipment(shipment_id, |s| s.status = ShipmentStatus::Delivered);
            DeliveryUpdate::Delivered
        }
    }
}
