//! Average Product Rating Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, models::RatingResponse},
    state::State,
};

/// Average Product Rating Handler
///
/// Zero when the product has no reviews.
#[endpoint(
    tags("reviews"),
    summary = "Average Product Rating",
    responses(
        (status_code = StatusCode::OK, description = "Mean star rating"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product id"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<RatingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product: ProductUuid = product.into_inner().to_id("productId")?;

    let avg_rating = state
        .app
        .reviews
        .average_rating(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(RatingResponse { avg_rating }))
}
