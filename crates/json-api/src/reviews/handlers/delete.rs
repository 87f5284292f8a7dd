//! Delete Review Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use storefront_app::domain::reviews::records::ReviewUuid;

use crate::{
    extensions::*, responses::MessageResponse, reviews::errors::into_status_error, state::State,
};

/// Delete Review Handler
///
/// Authors may delete their own reviews. Admins may delete any review.
#[endpoint(
    tags("reviews"),
    summary = "Delete Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Review removed"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the review author"),
        (status_code = StatusCode::NOT_FOUND, description = "Review not found"),
    ),
)]
#[tracing::instrument(
    name = "reviews.delete",
    skip(review, depot),
    fields(user_uuid = tracing::field::Empty, review_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    review: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let review: ReviewUuid = review.into_inner().to_id("reviewId")?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));
    span.record("review_uuid", tracing::field::display(review));

    state
        .app
        .reviews
        .delete_review(&caller, review)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Review removed")))
}
