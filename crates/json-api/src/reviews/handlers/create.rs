//! Create Review Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    reviews::{
        errors::into_status_error,
        models::{CreateReviewRequest, ReviewResponse},
    },
    state::State,
};

/// Create Review Handler
///
/// Reviews a product as the caller. Each user may review a product once.
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid rating or comment"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product already reviewed"),
    ),
)]
#[tracing::instrument(
    name = "reviews.create",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        review_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.identity_or_401()?;
    let submission = json.into_inner().into_submission()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(caller.user));
    span.record("product_uuid", tracing::field::display(submission.product_uuid));

    let review = state
        .app
        .reviews
        .create_review(&caller, submission)
        .await
        .map_err(into_status_error)?;

    span.record("review_uuid", tracing::field::display(review.uuid));

    res.created_at(format!("/api/reviews/{}", review.uuid))?;

    Ok(Json(review.into()))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::LOCATION,
        test::{ResponseExt, TestClient},
    };
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
            Router::with_path("api/reviews").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() -> TestResult {
        let product = ProductUuid::new();
        let review = make_review(TEST_USER, product, 4);
        let review_uuid = review.uuid;

        let mut reviews = MockReviewsService::new();

        reviews
            .expect_create_review()
            .once()
            .withf(move |caller, submission| {
                caller.user == TEST_USER
                    && submission.product_uuid == product
                    && submission.rating == 4
                    && submission.comment == "Boils fast"
            })
            .return_once(move |_, _| Ok(review));

        let mut res = TestClient::post("http://example.com/api/reviews")
            .json(&json!({ "productId": product, "rating": 4, "comment": "Boils fast" }))
            .send(&make_service(reviews))
            .await;

        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        let body: ReviewResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/reviews/{review_uuid}")));
        assert_eq!(body.user_name, "Test Customer");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_out_of_range_rating_returns_400() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews.expect_create_review().never();

        let res = TestClient::post("http://example.com/api/reviews")
            .json(&json!({ "productId": ProductUuid::new(), "rating": 9, "comment": "Great" }))
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_returns_409() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_create_review()
            .once()
            .return_once(|_, _| Err(ReviewsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/api/reviews")
            .json(&json!({ "productId": ProductUuid::new(), "rating": 5, "comment": "Again" }))
            .send(&make_service(reviews))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert!(
            body.contains("You have already reviewed this product"),
            "unexpected body: {body}"
        );

        Ok(())
    }
}
