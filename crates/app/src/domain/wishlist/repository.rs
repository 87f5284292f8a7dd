//! Wishlist Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    auth::UserUuid,
    database::try_get_timestamp,
    domain::{
        products::records::{ProductRecord, ProductUuid},
        wishlist::records::{WishlistEntry, WishlistItemRecord, WishlistItemUuid},
    },
};

const LIST_WISHLIST_SQL: &str = include_str!("sql/list_wishlist.sql");
const GET_WISHLIST_ITEM_SQL: &str = include_str!("sql/get_wishlist_item.sql");
const CREATE_WISHLIST_ITEM_SQL: &str = include_str!("sql/create_wishlist_item.sql");
const DELETE_WISHLIST_ITEM_SQL: &str = include_str!("sql/delete_wishlist_item.sql");

#[automock]
#[async_trait]
pub(crate) trait WishlistRepository: Send + Sync {
    /// Wishlist entries of a user with their products, most recently added first.
    async fn list_entries(&self, user: UserUuid) -> Result<Vec<WishlistEntry>, sqlx::Error>;

    async fn find_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<Option<WishlistItemRecord>, sqlx::Error>;

    async fn create_item(
        &self,
        uuid: WishlistItemUuid,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<WishlistItemRecord, sqlx::Error>;

    async fn delete_item(&self, user: UserUuid, product: ProductUuid) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgWishlistRepository {
    pool: PgPool,
}

impl PgWishlistRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for PgWishlistRepository {
    async fn list_entries(&self, user: UserUuid) -> Result<Vec<WishlistEntry>, sqlx::Error> {
        query_as::<Postgres, WishlistEntry>(LIST_WISHLIST_SQL)
            .bind(user.into_uuid())
            .fetch_all(&self.pool)
            .await
    }

    async fn find_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<Option<WishlistItemRecord>, sqlx::Error> {
        query_as::<Postgres, WishlistItemRecord>(GET_WISHLIST_ITEM_SQL)
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_item(
        &self,
        uuid: WishlistItemUuid,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<WishlistItemRecord, sqlx::Error> {
        query_as::<Postgres, WishlistItemRecord>(CREATE_WISHLIST_ITEM_SQL)
            .bind(uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_item(&self, user: UserUuid, product: ProductUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_WISHLIST_ITEM_SQL)
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for WishlistItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: WishlistItemUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for WishlistEntry {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            item: WishlistItemRecord {
                uuid: WishlistItemUuid::from_uuid(row.try_get("wishlist_uuid")?),
                user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
                product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
                created_at: try_get_timestamp(row, "added_at")?,
            },
            product: ProductRecord::from_row(row)?,
        })
    }
}
