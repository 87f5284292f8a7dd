//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*, products::errors::into_status_error, responses::MessageResponse, state::State,
};

/// Delete Product Handler
///
/// Reviews and wishlist entries for the product go with it. Carts and orders keep their
/// own copies of its details.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(product, depot),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let product: ProductUuid = product.into_inner().to_id("productId")?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));
    span.record("product_uuid", tracing::field::display(product));

    state
        .app
        .products
        .delete_product(&caller, product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Product deleted")))
}
