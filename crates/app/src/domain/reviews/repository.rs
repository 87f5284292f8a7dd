//! Reviews Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    auth::UserUuid,
    database::{try_get_timestamp, try_get_u64},
    domain::{
        products::records::ProductUuid,
        reviews::{
            data::NewReview,
            records::{RatingSummary, ReviewRecord, ReviewUuid},
        },
    },
};

const LIST_REVIEWS_SQL: &str = include_str!("sql/list_reviews.sql");
const GET_REVIEW_SQL: &str = include_str!("sql/get_review.sql");
const GET_USER_REVIEW_SQL: &str = include_str!("sql/get_user_review.sql");
const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const UPDATE_REVIEW_SQL: &str = include_str!("sql/update_review.sql");
const DELETE_REVIEW_SQL: &str = include_str!("sql/delete_review.sql");
const SUMMARIZE_REVIEWS_SQL: &str = include_str!("sql/summarize_reviews.sql");

#[automock]
#[async_trait]
pub(crate) trait ReviewsRepository: Send + Sync {
    /// Reviews of a product, newest first.
    async fn list_reviews(&self, product: ProductUuid) -> Result<Vec<ReviewRecord>, sqlx::Error>;

    async fn find_review(&self, review: ReviewUuid) -> Result<Option<ReviewRecord>, sqlx::Error>;

    async fn find_user_review(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<Option<ReviewRecord>, sqlx::Error>;

    async fn create_review(&self, review: NewReview) -> Result<ReviewRecord, sqlx::Error>;

    async fn update_review(
        &self,
        review: ReviewUuid,
        rating: u8,
        comment: String,
    ) -> Result<Option<ReviewRecord>, sqlx::Error>;

    async fn delete_review(&self, review: ReviewUuid) -> Result<u64, sqlx::Error>;

    async fn summarize(&self, product: ProductUuid) -> Result<RatingSummary, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgReviewsRepository {
    pool: PgPool,
}

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewsRepository for PgReviewsRepository {
    async fn list_reviews(&self, product: ProductUuid) -> Result<Vec<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(LIST_REVIEWS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&self.pool)
            .await
    }

    async fn find_review(&self, review: ReviewUuid) -> Result<Option<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(GET_REVIEW_SQL)
            .bind(review.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_user_review(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<Option<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(GET_USER_REVIEW_SQL)
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_review(&self, review: NewReview) -> Result<ReviewRecord, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(CREATE_REVIEW_SQL)
            .bind(review.uuid.into_uuid())
            .bind(review.user_uuid.into_uuid())
            .bind(review.product_uuid.into_uuid())
            .bind(i16::from(review.rating))
            .bind(review.comment)
            .bind(review.user_name)
            .fetch_one(&self.pool)
            .await
    }

    async fn update_review(
        &self,
        review: ReviewUuid,
        rating: u8,
        comment: String,
    ) -> Result<Option<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(UPDATE_REVIEW_SQL)
            .bind(review.into_uuid())
            .bind(i16::from(rating))
            .bind(comment)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_review(&self, review: ReviewUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_REVIEW_SQL)
            .bind(review.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn summarize(&self, product: ProductUuid) -> Result<RatingSummary, sqlx::Error> {
        let row = query(SUMMARIZE_REVIEWS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(RatingSummary {
            count: try_get_u64(&row, "review_count")?,
            average: row.try_get("average_rating")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating: i16 = row.try_get("rating")?;

        Ok(Self {
            uuid: ReviewUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            rating: u8::try_from(rating).map_err(|e| sqlx::Error::ColumnDecode {
                index: "rating".to_string(),
                source: Box::new(e),
            })?,
            comment: row.try_get("comment")?,
            user_name: row.try_get("user_name")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::products::{
            data::NewProduct,
            repository::{PgProductsRepository, ProductsRepository},
        },
        test::{TestDb, helpers::product_details},
    };

    use super::*;

    async fn seed_product(db: &TestDb) -> Result<ProductUuid, sqlx::Error> {
        let uuid = ProductUuid::new();

        PgProductsRepository::new(db.pool().clone())
            .create_product(NewProduct {
                uuid,
                details: product_details("Kettle", 1_500),
            })
            .await?;

        Ok(uuid)
    }

    fn review(user: UserUuid, product: ProductUuid, rating: u8) -> NewReview {
        NewReview {
            uuid: ReviewUuid::new(),
            user_uuid: user,
            product_uuid: product,
            rating,
            comment: "Boils quickly".to_string(),
            user_name: "Asha".to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn summarize_averages_ratings() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgReviewsRepository::new(db.pool().clone());
        let product = seed_product(&db).await?;

        repository.create_review(review(UserUuid::new(), product, 5)).await?;
        repository.create_review(review(UserUuid::new(), product, 2)).await?;

        let summary = repository.summarize(product).await?;

        assert_eq!(summary.count, 2);
        assert!((summary.average - 3.5).abs() < f64::EPSILON, "got {summary:?}");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn second_review_by_same_user_violates_unique_constraint() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgReviewsRepository::new(db.pool().clone());
        let product = seed_product(&db).await?;
        let user = UserUuid::new();

        repository.create_review(review(user, product, 4)).await?;

        let result = repository.create_review(review(user, product, 1)).await;

        assert!(result.is_err(), "expected a unique violation");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn summarize_without_reviews_is_zero() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgReviewsRepository::new(db.pool().clone());
        let product = seed_product(&db).await?;

        assert_eq!(repository.summarize(product).await?, RatingSummary::default());

        Ok(())
    }
}
