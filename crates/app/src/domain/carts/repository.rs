//! Carts Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, types::Json};

use crate::{
    auth::UserUuid,
    domain::carts::records::{CartEntry, CartRecord},
};

const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const SAVE_CART_SQL: &str = include_str!("sql/save_cart.sql");

#[automock]
#[async_trait]
pub(crate) trait CartsRepository: Send + Sync {
    async fn find_cart(&self, user: UserUuid) -> Result<Option<CartRecord>, sqlx::Error>;

    /// Insert or overwrite the entries of the user's cart.
    async fn save_cart(&self, cart: &CartRecord) -> Result<CartRecord, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgCartsRepository {
    pool: PgPool,
}

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartsRepository for PgCartsRepository {
    async fn find_cart(&self, user: UserUuid) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    async fn save_cart(&self, cart: &CartRecord) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(SAVE_CART_SQL)
            .bind(cart.user_uuid.into_uuid())
            .bind(Json(&cart.products))
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(products) = row.try_get::<Json<Vec<CartEntry>>, _>("products")?;

        Ok(Self {
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            products,
            created_at: Some(row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff()),
            updated_at: Some(row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff()),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::records::Quantity,
            products::repository::{PgProductsRepository, ProductsRepository},
        },
        test::{TestDb, helpers::new_product},
    };

    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn save_cart_upserts_by_user() -> TestResult {
        let db = TestDb::new().await;
        let products = PgProductsRepository::new(db.pool().clone());
        let carts = PgCartsRepository::new(db.pool().clone());

        let product = products
            .create_product(new_product("Kettle", 1_500))
            .await?;

        let mut cart = CartRecord::empty(UserUuid::new());

        cart.set_entry(&product, Quantity::coerce(Some(2)));

        let first = carts.save_cart(&cart).await?;

        cart.set_entry(&product, Quantity::ONE);

        let second = carts.save_cart(&cart).await?;

        assert_eq!(first.created_at, second.created_at);
        assert_eq!(second.products.len(), 1, "expected a single entry");
        assert_eq!(
            second.products.first().map(|e| e.quantity),
            Some(Quantity::ONE)
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn find_cart_for_new_user_returns_none() -> TestResult {
        let db = TestDb::new().await;
        let carts = PgCartsRepository::new(db.pool().clone());

        assert!(carts.find_cart(UserUuid::new()).await?.is_none());

        Ok(())
    }
}
