//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::{
    auth::UserUuid,
    domain::{carts::records::Quantity, products::records::ProductUuid},
};

use crate::{
    carts::{
        errors::into_status_error,
        models::{AddToCartRequest, CartResponse},
    },
    extensions::*,
    state::State,
};

/// Add Cart Item Handler
///
/// Sets the quantity of a product in the cart. An existing entry has its quantity replaced,
/// not incremented.
#[endpoint(
    tags("cart"),
    summary = "Add or Set Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed identifier"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the cart owner"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.add_item",
    skip(json, depot),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let request = json.into_inner();

    let user: UserUuid = request.user_id.to_id("userId")?;
    let product: ProductUuid = request.product_id.to_id("productId")?;
    let quantity = Quantity::coerce(request.requested_quantity());

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", quantity.get());

    let cart = state
        .app
        .carts
        .add_item(&caller, user, product, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
