//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use storefront_app::domain::orders::{data::StatusUpdate, records::OrderUuid};

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        models::{StatusUpdateRequest, StatusUpdatedResponse},
    },
    state::State,
};

/// Update Order Status Handler
///
/// Admin only. Any status may follow any other; each update appends a tracking event.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
#[tracing::instrument(
    name = "orders.update_status",
    skip(order, json, depot),
    fields(
        user_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty,
        status = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    order: PathParam<String>,
    json: JsonBody<StatusUpdateRequest>,
    depot: &mut Depot,
) -> Result<Json<StatusUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let order: OrderUuid = order.into_inner().to_id("orderId")?;
    let update = StatusUpdate::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));
    span.record("order_uuid", tracing::field::display(order));
    span.record("status", update.status.as_str());

    let order = state
        .app
        .orders
        .update_status(&caller, order, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(StatusUpdatedResponse {
        message: "Order status updated successfully".to_string(),
        order: order.into(),
    }))
}
