//! Place Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        models::{OrderResponse, PlaceOrderRequest},
    },
    state::State,
};

/// Place Order Handler
///
/// Line items are stored exactly as sent. The cart is left untouched; clients clear it with
/// a separate call.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid order fields"),
        (status_code = StatusCode::FORBIDDEN, description = "Orders may only be placed for yourself"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.place",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty,
        line_count = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<PlaceOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let order = json.into_inner().into_new_order()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(order.user_uuid));
    span.record("line_count", order.products.len());

    let order = state
        .app
        .orders
        .place_order(&caller, order)
        .await
        .map_err(into_status_error)?;

    span.record("order_uuid", tracing::field::display(order.uuid));

    res.created_at(format!("/api/orders/{}", order.uuid))?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        orders::{MockOrdersService, OrdersServiceError, status::PaymentMode},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{Mocks, TEST_USER, customer_service, placed_order};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        customer_service(
            Mocks {
                orders,
                ..Mocks::default()
            },
            Router::with_path("api/orders").post(handler),
        )
    }

    fn body(payment_mode: &str) -> serde_json::Value {
        json!({
            "userId": TEST_USER,
            "products": [
                { "productId": ProductUuid::new(), "name": "Kettle", "price": 1500, "quantity": 2 }
            ],
            "amount": 3000,
            "address": "1 High Street",
            "paymentMode": payment_mode,
            "contactPhone": "01234 567890"
        })
    }

    #[tokio::test]
    async fn test_place_order_returns_201() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .withf(|caller, order| {
                caller.user == TEST_USER
                    && order.user_uuid == TEST_USER
                    && order.amount == 3_000
                    && order.payment_mode == PaymentMode::Online
                    && order.contact.phone.as_deref() == Some("01234 567890")
            })
            .return_once(|_, order| Ok(placed_order(order)));

        let mut res = TestClient::post("http://example.com/api/orders")
            .json(&body("Online"))
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.status, "Placed");
        assert_eq!(body.payment_status, "Pending");
        assert_eq!(body.tracking_details.len(), 1);
        assert!(body.tracking_number.starts_with("TRK"));

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_unknown_payment_mode_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().never();

        let res = TestClient::post("http://example.com/api/orders")
            .json(&body("Barter"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_decimal_amount_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().never();

        let mut payload = body("COD");

        if let Some(amount) = payload.get_mut("amount") {
            *amount = json!(12.5);
        }

        let res = TestClient::post("http://example.com/api/orders")
            .json(&payload)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_invalid_payload_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().once().return_once(|_, _| {
            Err(OrdersServiceError::InvalidArgument(
                "order must contain at least one product",
            ))
        });

        let res = TestClient::post("http://example.com/api/orders")
            .json(&body("COD"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_for_someone_else_returns_403() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_place_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::Forbidden));

        let res = TestClient::post("http://example.com/api/orders")
            .json(&body("COD"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
