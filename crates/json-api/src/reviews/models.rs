//! Review request and response bodies.

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    products::records::ProductUuid,
    reviews::{
        data::{ReviewSubmission, ReviewUpdate},
        records::ReviewRecord,
    },
};

use crate::extensions::*;

/// Review Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,

    /// Star rating from 1 to 5
    pub rating: u8,

    pub comment: String,

    /// Display name of the reviewer at the time of writing
    pub user_name: String,

    pub created_at: String,
    pub updated_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(review: ReviewRecord) -> Self {
        Self {
            id: review.uuid.into_uuid(),
            user_id: review.user_uuid.into_uuid(),
            product_id: review.product_uuid.into_uuid(),
            rating: review.rating,
            comment: review.comment,
            user_name: review.user_name,
            created_at: review.created_at.to_string(),
            updated_at: review.updated_at.to_string(),
        }
    }
}

/// Create Review Request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateReviewRequest {
    pub product_id: String,
    pub rating: i64,
    pub comment: String,
}

impl CreateReviewRequest {
    pub(crate) fn into_submission(self) -> Result<ReviewSubmission, StatusError> {
        let product_uuid: ProductUuid = self.product_id.to_id("productId")?;

        Ok(ReviewSubmission {
            product_uuid,
            rating: star_rating(self.rating)?,
            comment: self.comment,
        })
    }
}

/// Update Review Request
///
/// Omitted fields keep their stored values.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateReviewRequest {
    #[serde(default)]
    pub rating: Option<i64>,

    #[serde(default)]
    pub comment: Option<String>,
}

impl TryFrom<UpdateReviewRequest> for ReviewUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateReviewRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            rating: request.rating.map(star_rating).transpose()?,
            comment: request.comment,
        })
    }
}

/// Review Count Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CountResponse {
    pub count: u64,
}

/// Average Rating Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RatingResponse {
    pub avg_rating: f64,
}

fn star_rating(rating: i64) -> Result<u8, StatusError> {
    u8::try_from(rating)
        .ok()
        .filter(|rating| (1..=5).contains(rating))
        .ok_or_else(|| StatusError::bad_request().brief("Rating must be between 1 and 5"))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn ratings_outside_one_to_five_are_rejected() {
        for rating in [-1, 0, 6, 300] {
            assert!(star_rating(rating).is_err(), "accepted {rating}");
        }
    }

    #[test]
    fn create_request_becomes_submission() -> TestResult {
        let product = ProductUuid::new();

        let submission = CreateReviewRequest {
            product_id: product.to_string(),
            rating: 4,
            comment: "Boils fast".to_string(),
        }
        .into_submission()?;

        assert_eq!(submission.product_uuid, product);
        assert_eq!(submission.rating, 4);

        Ok(())
    }

    #[test]
    fn update_request_keeps_omitted_fields_empty() -> TestResult {
        let update = ReviewUpdate::try_from(UpdateReviewRequest {
            rating: None,
            comment: Some("Changed my mind".to_string()),
        })?;

        assert_eq!(
            update,
            ReviewUpdate {
                rating: None,
                comment: Some("Changed my mind".to_string()),
            }
        );

        Ok(())
    }
}
