//! Order request and response bodies.

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    orders::{
        data::{ContactDetails, NewOrder, StatusUpdate},
        records::{OrderLine, OrderRecord, OrderTracking, TrackingEvent},
        status::{OrderStatus, PaymentMode},
    },
    products::records::ProductUuid,
};

use crate::extensions::*;

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,

    /// Line items as they were at placement
    pub products: Vec<OrderLineResponse>,

    /// Order total in minor currency units
    pub amount: u64,

    pub address: String,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub status: String,
    pub payment_status: String,
    pub payment_mode: String,
    pub estimated_delivery: String,
    pub tracking_number: String,
    pub delivery_partner: String,

    /// Every status change, oldest first
    pub tracking_details: Vec<TrackingEventResponse>,

    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            id: order.uuid.into_uuid(),
            user_id: order.user_uuid.into_uuid(),
            products: order
                .products
                .into_iter()
                .map(OrderLineResponse::from)
                .collect(),
            amount: order.amount,
            address: order.address,
            contact_phone: order.contact.phone,
            contact_email: order.contact.email,
            status: order.status.to_string(),
            payment_status: order.payment_status.to_string(),
            payment_mode: order.payment_mode.to_string(),
            estimated_delivery: order.estimated_delivery.to_string(),
            tracking_number: order.tracking_number,
            delivery_partner: order.delivery_partner,
            tracking_details: order
                .tracking_details
                .into_iter()
                .map(TrackingEventResponse::from)
                .collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderLineResponse {
    pub product_id: Uuid,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_uuid.into_uuid(),
            name: line.name,
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Tracking Event Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackingEventResponse {
    pub status: String,
    pub location: String,
    pub timestamp: String,
    pub description: String,
}

impl From<TrackingEvent> for TrackingEventResponse {
    fn from(event: TrackingEvent) -> Self {
        Self {
            status: event.status.to_string(),
            location: event.location,
            timestamp: event.timestamp.to_string(),
            description: event.description,
        }
    }
}

/// Tracking Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrackingResponse {
    pub order_id: Uuid,
    pub status: String,
    pub tracking_number: String,
    pub delivery_partner: String,
    pub estimated_delivery: String,
    pub tracking_details: Vec<TrackingEventResponse>,

    /// Location of the latest tracking event
    pub current_location: String,
}

impl From<OrderTracking> for TrackingResponse {
    fn from(tracking: OrderTracking) -> Self {
        Self {
            order_id: tracking.order_uuid.into_uuid(),
            status: tracking.status.to_string(),
            tracking_number: tracking.tracking_number,
            delivery_partner: tracking.delivery_partner,
            estimated_delivery: tracking.estimated_delivery.to_string(),
            tracking_details: tracking
                .tracking_details
                .into_iter()
                .map(TrackingEventResponse::from)
                .collect(),
            current_location: tracking.current_location,
        }
    }
}

/// Place Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceOrderRequest {
    pub user_id: String,

    /// Line items, normally copied from the cart
    pub products: Vec<OrderLineRequest>,

    /// Order total in whole minor currency units. Decimal values such as
    /// `12.5` are rejected.
    pub amount: u64,

    pub address: String,

    /// One of COD, Online, Card or UPI
    pub payment_mode: String,

    #[serde(default)]
    pub contact_phone: Option<String>,

    #[serde(default)]
    pub contact_email: Option<String>,
}

/// Order Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderLineRequest {
    pub product_id: String,
    pub name: String,

    /// Unit price in whole minor currency units. Decimal values are rejected.
    pub price: u64,

    pub quantity: u32,
}

impl PlaceOrderRequest {
    pub(crate) fn into_new_order(self) -> Result<NewOrder, StatusError> {
        let payment_mode = self
            .payment_mode
            .parse::<PaymentMode>()
            .map_err(|_ignored| StatusError::bad_request().brief("Invalid payment mode"))?;

        let products = self
            .products
            .into_iter()
            .map(|line| {
                let product_uuid: ProductUuid = line.product_id.to_id("productId")?;

                Ok(OrderLine {
                    product_uuid,
                    name: line.name,
                    price: line.price,
                    quantity: line.quantity,
                })
            })
            .collect::<Result<Vec<_>, StatusError>>()?;

        Ok(NewOrder {
            user_uuid: self.user_id.to_id("userId")?,
            products,
            amount: self.amount,
            address: self.address,
            contact: ContactDetails {
                phone: self.contact_phone,
                email: self.contact_email,
            },
            payment_mode,
        })
    }
}

/// Status Update Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatusUpdateRequest {
    /// Placed, Processing, Shipped, Out for Delivery, Delivered or Cancelled
    pub status: String,

    /// Defaults to the warehouse
    #[serde(default)]
    pub location: Option<String>,

    /// Defaults to the standard text for the status
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<StatusUpdateRequest> for StatusUpdate {
    type Error = StatusError;

    fn try_from(request: StatusUpdateRequest) -> Result<Self, Self::Error> {
        let status = request
            .status
            .parse::<OrderStatus>()
            .map_err(|_ignored| StatusError::bad_request().brief("Invalid order status"))?;

        Ok(StatusUpdate {
            status,
            location: request.location,
            description: request.description,
        })
    }
}

/// Status Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatusUpdatedResponse {
    pub message: String,
    pub order: OrderResponse,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn request(payment_mode: &str, product_id: &str) -> TestResult<PlaceOrderRequest> {
        Ok(serde_json::from_value(json!({
            "userId": Uuid::nil(),
            "products": [
                { "productId": product_id, "name": "Kettle", "price": 1500, "quantity": 2 }
            ],
            "amount": 3000,
            "address": "1 High Street",
            "paymentMode": payment_mode,
        }))?)
    }

    #[test]
    fn place_order_request_converts() -> TestResult {
        let product = Uuid::now_v7();
        let order = request("upi", &product.to_string())?
            .into_new_order()?;

        assert_eq!(order.payment_mode, PaymentMode::Upi);
        assert_eq!(order.amount, 3_000);
        assert_eq!(
            order.products.first().map(|line| line.product_uuid.into_uuid()),
            Some(product)
        );
        assert_eq!(order.contact, ContactDetails::default());

        Ok(())
    }

    #[test]
    fn unknown_payment_mode_is_rejected() -> TestResult {
        let result = request("Cheque", &Uuid::now_v7().to_string())?.into_new_order();

        assert_eq!(
            result.err().map(|error| error.brief),
            Some("Invalid payment mode".to_string())
        );

        Ok(())
    }

    #[test]
    fn malformed_line_product_id_is_rejected() -> TestResult {
        let result = request("COD", "abc")?.into_new_order();

        assert_eq!(
            result.err().map(|error| error.brief),
            Some("Invalid productId format".to_string())
        );

        Ok(())
    }

    #[test]
    fn status_names_are_case_insensitive() -> TestResult {
        let update = StatusUpdate::try_from(StatusUpdateRequest {
            status: "out for delivery".to_string(),
            location: Some("Depot 4".to_string()),
            description: None,
        })?;

        assert_eq!(update.status, OrderStatus::OutForDelivery);
        assert_eq!(update.location.as_deref(), Some("Depot 4"));

        Ok(())
    }
}
