//! Remove From Wishlist Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    state::State,
    wishlist::{errors::into_status_error, models::RemovedResponse},
};

/// Remove From Wishlist Handler
#[endpoint(
    tags("wishlist"),
    summary = "Remove From Wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not in wishlist"),
    ),
)]
#[tracing::instrument(
    name = "wishlist.remove",
    skip(product, depot),
    fields(user_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<RemovedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let product: ProductUuid = product.into_inner().to_id("productId")?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));
    span.record("product_uuid", tracing::field::display(product));

    state
        .app
        .wishlist
        .remove_from_wishlist(&caller, product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(RemovedResponse {
        message: "Product removed from wishlist".to_string(),
        product_id: product.into_uuid(),
    }))
}
