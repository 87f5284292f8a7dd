//! Count Product Reviews Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, models::CountResponse},
    state::State,
};

/// Count Product Reviews Handler
#[endpoint(
    tags("reviews"),
    summary = "Count Product Reviews",
    responses(
        (status_code = StatusCode::OK, description = "Number of reviews"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product id"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product: ProductUuid = product.into_inner().to_id("productId")?;

    let count = state
        .app
        .reviews
        .count_reviews(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CountResponse { count }))
}
