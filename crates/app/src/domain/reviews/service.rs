//! Reviews service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    auth::Identity,
    domain::{
        products::{
            records::ProductUuid,
            repository::{PgProductsRepository, ProductsRepository},
        },
        reviews::{
            data::{NewReview, ReviewSubmission, ReviewUpdate, is_valid_rating},
            errors::ReviewsServiceError,
            records::{RatingSummary, ReviewRecord, ReviewUuid},
            repository::{PgReviewsRepository, ReviewsRepository},
        },
    },
};

#[derive(Clone)]
pub struct PgReviewsService {
    reviews: Arc<dyn ReviewsRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repositories(
            Arc::new(PgReviewsRepository::new(pool.clone())),
            Arc::new(PgProductsRepository::new(pool)),
        )
    }

    #[must_use]
    pub(crate) fn with_repositories(
        reviews: Arc<dyn ReviewsRepository>,
        products: Arc<dyn ProductsRepository>,
    ) -> Self {
        Self { reviews, products }
    }

    /// Recompute the product's rating and review count from its reviews.
    async fn refresh_product_rating(
        &self,
        product: ProductUuid,
    ) -> Result<RatingSummary, ReviewsServiceError> {
        let summary = self.reviews.summarize(product).await?;

        self.products
            .set_rating(product, summary.average, summary.count)
            .await?;

        debug!(
            product_uuid = %product,
            rating = summary.average,
            num_reviews = summary.count,
            "refreshed product rating"
        );

        Ok(summary)
    }

    async fn find_review(&self, review: ReviewUuid) -> Result<ReviewRecord, ReviewsServiceError> {
        self.reviews
            .find_review(review)
            .await?
            .ok_or(ReviewsServiceError::NotFound)
    }
}

fn validate_rating(rating: u8) -> Result<u8, ReviewsServiceError> {
    if is_valid_rating(rating) {
        Ok(rating)
    } else {
        Err(ReviewsServiceError::InvalidArgument(
            "rating must be between 1 and 5",
        ))
    }
}

fn validate_comment(comment: String) -> Result<String, ReviewsServiceError> {
    if comment.trim().is_empty() {
        Err(ReviewsServiceError::InvalidArgument(
            "comment must not be blank",
        ))
    } else {
        Ok(comment)
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError> {
        let reviews = self.reviews.list_reviews(product).await?;

        Ok(reviews)
    }

    async fn count_reviews(&self, product: ProductUuid) -> Result<u64, ReviewsServiceError> {
        Ok(self.reviews.summarize(product).await?.count)
    }

    async fn average_rating(&self, product: ProductUuid) -> Result<f64, ReviewsServiceError> {
        Ok(self.reviews.summarize(product).await?.average)
    }

    async fn create_review(
        &self,
        caller: &Identity,
        submission: ReviewSubmission,
    ) -> Result<ReviewRecord, ReviewsServiceError> {
        let rating = validate_rating(submission.rating)?;
        let comment = validate_comment(submission.comment)?;

        let product = self
            .products
            .find_product(submission.product_uuid)
            .await?
            .ok_or(ReviewsServiceError::ProductNotFound)?;

        if self
            .reviews
            .find_user_review(caller.user, product.uuid)
            .await?
            .is_some()
        {
            return Err(ReviewsServiceError::AlreadyExists);
        }

        let review = self
            .reviews
            .create_review(NewReview {
                uuid: ReviewUuid::new(),
                user_uuid: caller.user,
                product_uuid: product.uuid,
                rating,
                comment,
                user_name: caller.display_name().to_owned(),
            })
            .await?;

        self.refresh_product_rating(product.uuid).await?;

        info!(
            review_uuid = %review.uuid,
            product_uuid = %product.uuid,
            rating = review.rating,
            "created review"
        );

        Ok(review)
    }

    async fn update_review(
        &self,
        caller: &Identity,
        review: ReviewUuid,
        update: ReviewUpdate,
    ) -> Result<ReviewRecord, ReviewsServiceError> {
        let rating = update.rating.map(validate_rating).transpose()?;
        let comment = update.comment.map(validate_comment).transpose()?;

        let existing = self.find_review(review).await?;

        caller.ensure_is(existing.user_uuid)?;

        let updated = self
            .reviews
            .update_review(
                existing.uuid,
                rating.unwrap_or(existing.rating),
                comment.unwrap_or(existing.comment),
            )
            .await?
            .ok_or(ReviewsServiceError::NotFound)?;

        self.refresh_product_rating(updated.product_uuid).await?;

        info!(review_uuid = %updated.uuid, "updated review");

        Ok(updated)
    }

    async fn delete_review(
        &self,
        caller: &Identity,
        review: ReviewUuid,
    ) -> Result<(), ReviewsServiceError> {
        let existing = self.find_review(review).await?;

        caller.ensure_can_act_for(existing.user_uuid)?;

        if self.reviews.delete_review(existing.uuid).await? == 0 {
            return Err(ReviewsServiceError::NotFound);
        }

        self.refresh_product_rating(existing.product_uuid).await?;

        info!(review_uuid = %existing.uuid, "deleted review");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Reviews of a product, newest first.
    async fn list_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError>;

    async fn count_reviews(&self, product: ProductUuid) -> Result<u64, ReviewsServiceError>;

    /// Mean rating of a product, zero when it has no reviews.
    async fn average_rating(&self, product: ProductUuid) -> Result<f64, ReviewsServiceError>;

    /// Review a product as the caller. Each user may review a product once.
    async fn create_review(
        &self,
        caller: &Identity,
        submission: ReviewSubmission,
    ) -> Result<ReviewRecord, ReviewsServiceError>;

    /// Edit the caller's own review.
    async fn update_review(
        &self,
        caller: &Identity,
        review: ReviewUuid,
        update: ReviewUpdate,
    ) -> Result<ReviewRecord, ReviewsServiceError>;

    /// Delete a review. Owners and admins only.
    async fn delete_review(
        &self,
        caller: &Identity,
        review: ReviewUuid,
    ) -> Result<(), ReviewsServiceError>;
}
