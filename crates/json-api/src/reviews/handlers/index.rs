//! List Product Reviews Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, models::ReviewResponse},
    state::State,
};

/// List Product Reviews Handler
///
/// Reviews of a product, newest first.
#[endpoint(
    tags("reviews"),
    summary = "List Product Reviews",
    responses(
        (status_code = StatusCode::OK, description = "Reviews, newest first"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product id"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ReviewResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product: ProductUuid = product.into_inner().to_id("productId")?;

    let reviews = state
        .app
        .reviews
        .list_reviews(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}
