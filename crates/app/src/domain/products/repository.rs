//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::{to_i64, try_get_timestamp, try_get_u64},
    domain::products::{
        data::{NewProduct, ProductDetails, ProductFilter, ProductUpdate, contains_pattern},
        records::{ProductRecord, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const SET_PRODUCT_RATING_SQL: &str = include_str!("sql/set_product_rating.sql");

#[automock]
#[async_trait]
pub(crate) trait ProductsRepository: Send + Sync {
    async fn list_products(&self, filter: &ProductFilter)
    -> Result<Vec<ProductRecord>, sqlx::Error>;

    async fn find_product(&self, product: ProductUuid)
    -> Result<Option<ProductRecord>, sqlx::Error>;

    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, sqlx::Error>;

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, sqlx::Error>;

    async fn delete_product(&self, product: ProductUuid) -> Result<u64, sqlx::Error>;

    /// Overwrite the review aggregate of a product.
    async fn set_rating(
        &self,
        product: ProductUuid,
        rating: f64,
        num_reviews: u64,
    ) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.category.as_deref().map(contains_pattern))
            .bind(filter.search.as_deref().map(contains_pattern))
            .fetch_all(&self.pool)
            .await
    }

    async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, sqlx::Error> {
        let ProductDetails {
            name,
            brand,
            category,
            price,
            description,
            image,
            count_in_stock,
        } = product.details;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(name)
            .bind(brand)
            .bind(category)
            .bind(to_i64(price)?)
            .bind(description)
            .bind(image)
            .bind(to_i64(count_in_stock)?)
            .fetch_one(&self.pool)
            .await
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        let ProductDetails {
            name,
            brand,
            category,
            price,
            description,
            image,
            count_in_stock,
        } = update.details;

        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(name)
            .bind(brand)
            .bind(category)
            .bind(to_i64(price)?)
            .bind(description)
            .bind(image)
            .bind(to_i64(count_in_stock)?)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn set_rating(
        &self,
        product: ProductUuid,
        rating: f64,
        num_reviews: u64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_PRODUCT_RATING_SQL)
            .bind(product.into_uuid())
            .bind(rating)
            .bind(to_i64(num_reviews)?)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            brand: row.try_get("brand")?,
            category: row.try_get("category")?,
            price: try_get_u64(row, "price")?,
            description: row.try_get("description")?,
            image: row.try_get("image")?,
            count_in_stock: try_get_u64(row, "count_in_stock")?,
            rating: row.try_get("rating")?,
            num_reviews: try_get_u64(row, "num_reviews")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
