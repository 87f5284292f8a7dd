//! List Wishlist Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    wishlist::{errors::into_status_error, models::WishlistItemResponse},
};

/// List Wishlist Handler
///
/// The caller's wishlist with current product details.
#[endpoint(
    tags("wishlist"),
    summary = "List Wishlist",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Wishlist items"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not authenticated"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<WishlistItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;

    let entries = state
        .app
        .wishlist
        .list_wishlist(&caller)
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        entries
            .into_iter()
            .map(WishlistItemResponse::from)
            .collect(),
    ))
}
