//! List User Orders Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::auth::UserUuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// List User Orders Handler
///
/// Returns a user's orders, newest first.
#[endpoint(
    tags("orders"),
    summary = "List User Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders, newest first"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed user id"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the order owner"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let user: UserUuid = user.into_inner().to_id("userId")?;

    let orders = state
        .app
        .orders
        .list_user_orders(&caller, user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
