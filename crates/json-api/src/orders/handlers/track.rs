//! Track Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::orders::records::OrderUuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::TrackingResponse},
    state::State,
};

/// Track Order Handler
///
/// Returns the tracking history and the order's current location.
#[endpoint(
    tags("orders"),
    summary = "Track Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Tracking details"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the order owner"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<TrackingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let order: OrderUuid = order.into_inner().to_id("orderId")?;

    let tracking = state
        .app
        .orders
        .track_order(&caller, order)
        .await
        .map_err(into_status_error)?;

    Ok(Json(tracking.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::{Mocks, TEST_USER, customer_service, make_order};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        customer_service(
            Mocks {
                orders,
                ..Mocks::default()
            },
            Router::with_path("api/orders/{order}/track").get(handler),
        )
    }

    #[tokio::test]
    async fn test_track_reports_current_location() -> TestResult {
        let order = make_order(TEST_USER);
        let uuid = order.uuid;

        let mut orders = MockOrdersService::new();

        orders
            .expect_track_order()
            .once()
            .withf(move |_, o| *o == uuid)
            .return_once(move |_, _| Ok(order.tracking()));

        let mut res = TestClient::get(format!("http://example.com/api/orders/{uuid}/track"))
            .send(&make_service(orders))
            .await;

        let body: TrackingResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.order_id, uuid.into_uuid());
        assert_eq!(body.current_location, "Warehouse");
        assert_eq!(body.tracking_details.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_track_other_users_order_returns_403() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_track_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::Forbidden));

        let res = TestClient::get(format!(
            "http://example.com/api/orders/{}/track",
            OrderUuid::new()
        ))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
