//! Check Wishlist Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    state::State,
    wishlist::{errors::into_status_error, models::CheckResponse},
};

/// Check Wishlist Handler
///
/// Whether a product is in the caller's wishlist.
#[endpoint(
    tags("wishlist"),
    summary = "Check Wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Membership flag"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product id"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CheckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let product: ProductUuid = product.into_inner().to_id("productId")?;

    let in_wishlist = state
        .app
        .wishlist
        .is_in_wishlist(&caller, product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckResponse { in_wishlist }))
}
