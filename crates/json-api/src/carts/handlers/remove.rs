//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::{auth::UserUuid, domain::products::records::ProductUuid};

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, RemoveFromCartRequest},
    },
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removing a product that is not in the cart succeeds and returns the cart unchanged.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed identifier"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the cart owner"),
        (status_code = StatusCode::NOT_FOUND, description = "User has no cart"),
    ),
)]
#[tracing::instrument(
    name = "carts.remove_item",
    skip(json, depot),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<RemoveFromCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let request = json.into_inner();

    let user: UserUuid = request.user_id.to_id("userId")?;
    let product: ProductUuid = request.product_id.to_id("productId")?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("product_uuid", tracing::field::display(product));

    let cart = state
        .app
        .carts
        .remove_item(&caller, user, product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
