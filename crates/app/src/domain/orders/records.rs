//! Order Records

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    auth::UserUuid,
    domain::{
        orders::{
            data::{ContactDetails, NewOrder, StatusUpdate},
            status::{OrderStatus, PaymentMode, PaymentStatus},
        },
        products::records::ProductUuid,
    },
    uuids::TypedUuid,
};

/// Location recorded on tracking events when none is given.
pub const DEFAULT_LOCATION: &str = "Warehouse";

/// Location reported for an order without any tracking events.
pub const UNTRACKED_LOCATION: &str = "Processing center";

/// Carrier assigned to every new order.
pub const DEFAULT_DELIVERY_PARTNER: &str = "FastShip";

const PLACEMENT_LEAD_TIME: SignedDuration = SignedDuration::from_hours(5 * 24);
const SHIPPING_LEAD_TIME: SignedDuration = SignedDuration::from_hours(3 * 24);

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// A product line frozen at placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

/// One entry in the append-only tracking history of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub status: OrderStatus,
    pub location: String,
    pub timestamp: Timestamp,
    pub description: String,
}

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub products: Vec<OrderLine>,
    pub amount: u64,
    pub address: String,
    pub contact: ContactDetails,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_mode: PaymentMode,
    pub estimated_delivery: Timestamp,
    pub tracking_number: String,
    pub delivery_partner: String,
    pub tracking_details: Vec<TrackingEvent>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The requested status change is not allowed from the order's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move order from {from} to {to}")]
pub struct InvalidTransition {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// Read-only tracking view of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTracking {
    pub order_uuid: OrderUuid,
    pub status: OrderStatus,
    pub tracking_number: String,
    pub delivery_partner: String,
    pub estimated_delivery: Timestamp,
    pub tracking_details: Vec<TrackingEvent>,
    pub current_location: String,
}

fn later(now: Timestamp, lead_time: SignedDuration) -> Timestamp {
    now.checked_add(lead_time).unwrap_or(Timestamp::MAX)
}

impl OrderRecord {
    /// Build a freshly placed order with its first tracking event.
    #[must_use]
    pub fn place(
        uuid: OrderUuid,
        order: NewOrder,
        tracking_number: String,
        now: Timestamp,
    ) -> Self {
        let mut placed = Self {
            uuid,
            user_uuid: order.user_uuid,
            products: order.products,
            amount: order.amount,
            address: order.address,
            contact: order.contact,
            status: OrderStatus::Placed,
            payment_status: order.payment_mode.initial_payment_status(),
            payment_mode: order.payment_mode,
            estimated_delivery: later(now, PLACEMENT_LEAD_TIME),
            tracking_number,
            delivery_partner: DEFAULT_DELIVERY_PARTNER.to_owned(),
            tracking_details: Vec::with_capacity(1),
            created_at: now,
            updated_at: now,
        };

        placed.record_event(OrderStatus::Placed, None, None, now);

        placed
    }

    /// Cancel the order. Delivered orders cannot be cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when the order has been delivered.
    pub fn cancel(&mut self, now: Timestamp) -> Result<(), InvalidTransition> {
        if self.status == OrderStatus::Delivered {
            return Err(InvalidTransition {
                from: self.status,
                to: OrderStatus::Cancelled,
            });
        }

        self.record_event(OrderStatus::Cancelled, None, None, now);

        Ok(())
    }

    /// Apply an administrative status change.
    pub fn apply_status(&mut self, update: StatusUpdate, now: Timestamp) {
        match update.status {
            OrderStatus::Shipped => self.estimated_delivery = later(now, SHIPPING_LEAD_TIME),
            OrderStatus::OutForDelivery => self.estimated_delivery = now,
            _ => {}
        }

        self.record_event(update.status, update.location, update.description, now);
    }

    fn record_event(
        &mut self,
        status: OrderStatus,
        location: Option<String>,
        description: Option<String>,
        now: Timestamp,
    ) {
        self.status = status;
        self.updated_at = now;

        self.tracking_details.push(TrackingEvent {
            status,
            location: location
                .filter(|location| !location.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOCATION.to_owned()),
            timestamp: now,
            description: description
                .filter(|description| !description.trim().is_empty())
                .unwrap_or_else(|| status.description().to_owned()),
        });
    }

    #[must_use]
    pub fn current_location(&self) -> &str {
        self.tracking_details
            .last()
            .map_or(UNTRACKED_LOCATION, |event| event.location.as_str())
    }

    #[must_use]
    pub fn tracking(&self) -> OrderTracking {
        OrderTracking {
            order_uuid: self.uuid,
            status: self.status,
            tracking_number: self.tracking_number.clone(),
            delivery_partner: self.delivery_partner.clone(),
            estimated_delivery: self.estimated_delivery,
            tracking_details: self.tracking_details.clone(),
            current_location: self.current_location().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn placed_at(now: Timestamp) -> OrderRecord {
        OrderRecord::place(
            OrderUuid::new(),
            NewOrder {
                user_uuid: UserUuid::new(),
                products: vec![OrderLine {
                    product_uuid: ProductUuid::new(),
                    name: "Kettle".to_string(),
                    price: 1_500,
                    quantity: 2,
                }],
                amount: 3_000,
                address: "12 Lake Road".to_string(),
                contact: ContactDetails::default(),
                payment_mode: PaymentMode::Online,
            },
            "TRK123456".to_string(),
            now,
        )
    }

    #[test]
    fn placing_records_initial_event() -> TestResult {
        let now: Timestamp = "2026-03-01T10:00:00Z".parse()?;
        let order = placed_at(now);

        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.delivery_partner, "FastShip");
        assert_eq!(order.estimated_delivery, "2026-03-06T10:00:00Z".parse()?);
        assert_eq!(
            order.tracking_details,
            vec![TrackingEvent {
                status: OrderStatus::Placed,
                location: "Warehouse".to_string(),
                timestamp: now,
                description: "Order has been placed successfully".to_string(),
            }]
        );

        Ok(())
    }

    #[test]
    fn cancelling_appends_one_event() -> TestResult {
        let now: Timestamp = "2026-03-01T10:00:00Z".parse()?;
        let mut order = placed_at(now);

        order.cancel(now)?;

        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.tracking_details.len(), 2);
        assert_eq!(
            order.tracking_details.last().map(|e| e.description.as_str()),
            Some("Order has been cancelled")
        );

        Ok(())
    }

    #[test]
    fn delivered_orders_cannot_be_cancelled() -> TestResult {
        let now: Timestamp = "2026-03-01T10:00:00Z".parse()?;
        let mut order = placed_at(now);

        order.apply_status(StatusUpdate::to(OrderStatus::Delivered), now);

        let before = order.clone();
        let result = order.cancel(now);

        assert_eq!(
            result,
            Err(InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Cancelled,
            })
        );
        assert_eq!(order, before, "a rejected cancel must not touch the order");

        Ok(())
    }

    #[test]
    fn shipping_moves_estimate_three_days_out() -> TestResult {
        let placed: Timestamp = "2026-03-01T10:00:00Z".parse()?;
        let shipped: Timestamp = "2026-03-02T08:00:00Z".parse()?;
        let mut order = placed_at(placed);

        order.apply_status(StatusUpdate::to(OrderStatus::Shipped), shipped);

        assert_eq!(order.estimated_delivery, "2026-03-05T08:00:00Z".parse()?);

        order.apply_status(StatusUpdate::to(OrderStatus::OutForDelivery), shipped);

        assert_eq!(order.estimated_delivery, shipped);

        Ok(())
    }

    #[test]
    fn repeated_status_still_appends() -> TestResult {
        let now: Timestamp = "2026-03-01T10:00:00Z".parse()?;
        let mut order = placed_at(now);

        order.apply_status(StatusUpdate::to(OrderStatus::Processing), now);
        order.apply_status(StatusUpdate::to(OrderStatus::Processing), now);

        assert_eq!(order.tracking_details.len(), 3);

        Ok(())
    }

    #[test]
    fn custom_location_and_description_are_kept() -> TestResult {
        let now: Timestamp = "2026-03-01T10:00:00Z".parse()?;
        let mut order = placed_at(now);

        order.apply_status(
            StatusUpdate {
                status: OrderStatus::Shipped,
                location: Some("Pune hub".to_string()),
                description: Some("Left the hub".to_string()),
            },
            now,
        );

        assert_eq!(order.current_location(), "Pune hub");
        assert_eq!(
            order.tracking_details.last().map(|e| e.description.as_str()),
            Some("Left the hub")
        );

        Ok(())
    }

    #[test]
    fn current_location_without_events_is_processing_center() -> TestResult {
        let now: Timestamp = "2026-03-01T10:00:00Z".parse()?;
        let mut order = placed_at(now);

        order.tracking_details.clear();

        assert_eq!(order.tracking().current_location, "Processing center");

        Ok(())
    }
}
