//! Update Review Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use storefront_app::domain::reviews::{data::ReviewUpdate, records::ReviewUuid};

use crate::{
    extensions::*,
    reviews::{
        errors::into_status_error,
        models::{ReviewResponse, UpdateReviewRequest},
    },
    state::State,
};

/// Update Review Handler
///
/// Edits the caller's own review.
#[endpoint(
    tags("reviews"),
    summary = "Update Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Review updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid rating or comment"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the review author"),
        (status_code = StatusCode::NOT_FOUND, description = "Review not found"),
    ),
)]
#[tracing::instrument(
    name = "reviews.update",
    skip(review, json, depot),
    fields(user_uuid = tracing::field::Empty, review_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    review: PathParam<String>,
    json: JsonBody<UpdateReviewRequest>,
    depot: &mut Depot,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let review: ReviewUuid = review.into_inner().to_id("reviewId")?;
    let update = ReviewUpdate::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));
    span.record("review_uuid", tracing::field::display(review));

    let review = state
        .app
        .reviews
        .update_review(&caller, review, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(review.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        products::records::ProductUuid,
        reviews::{MockReviewsService, ReviewsServiceError},
    };

    use crate::test_helpers::{Mocks, TEST_USER, customer_service, make_review};

    use super::*;

    fn make_service(reviews: MockReviewsService) -> Service {
        customer_service(
            Mocks {
                reviews,
                ..Mocks::default()
            },
            Router::with_path("api/reviews/{review}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_passes_partial_edit() -> TestResult {
        let uuid = ReviewUuid::new();

        let mut reviews = MockReviewsService::new();

        reviews
            .expect_update_review()
            .once()
            .withf(move |_, r, update| {
                *r == uuid && update.rating == Some(2) && update.comment.is_none()
            })
            .return_once(|_, _, _| Ok(make_review(TEST_USER, ProductUuid::new(), 2)));

        let mut res = TestClient::put(format!("http://example.com/api/reviews/{uuid}"))
            .json(&json!({ "rating": 2 }))
            .send(&make_service(reviews))
            .await;

        let body: ReviewResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.rating, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_someone_elses_review_returns_403() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_update_review()
            .once()
            .return_once(|_, _, _| Err(ReviewsServiceError::Forbidden));

        let res = TestClient::put(format!(
            "http://example.com/api/reviews/{}",
            ReviewUuid::new()
        ))
        .json(&json!({ "comment": "Edited" }))
        .send(&make_service(reviews))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
