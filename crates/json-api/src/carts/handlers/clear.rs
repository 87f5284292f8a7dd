//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::{auth::UserUuid, domain::carts::records::ClearOutcome};

use crate::{
    carts::{
        errors::into_status_error,
        models::{ClearCartRequest, ClearCartResponse},
    },
    extensions::*,
    state::State,
};

/// Clear Cart Handler
///
/// Empties the cart but keeps it. Clearing an empty or missing cart succeeds.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed user id"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the cart owner"),
    ),
)]
#[tracing::instrument(
    name = "carts.clear",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ClearCartRequest>,
    depot: &mut Depot,
) -> Result<Json<ClearCartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let user: UserUuid = json.into_inner().user_id.to_id("userId")?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    let cleared = state
        .app
        .carts
        .clear_cart(&caller, user)
        .await
        .map_err(into_status_error)?;

    let message = match cleared.outcome {
        ClearOutcome::Cleared => "Cart cleared",
        ClearOutcome::AlreadyEmpty => "Cart is already empty",
    };

    Ok(Json(ClearCartResponse {
        message: message.to_string(),
        cart: cleared.cart.into(),
    }))
}
