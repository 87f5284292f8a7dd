//! Orders Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, types::Json};

use crate::{
    auth::UserUuid,
    database::{to_i64, try_get_timestamp, try_get_u64},
    domain::orders::{
        data::ContactDetails,
        records::{OrderLine, OrderRecord, OrderUuid, TrackingEvent},
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_USER_ORDERS_SQL: &str = include_str!("sql/list_user_orders.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const UPDATE_ORDER_PROGRESS_SQL: &str = include_str!("sql/update_order_progress.sql");

#[automock]
#[async_trait]
pub(crate) trait OrdersRepository: Send + Sync {
    async fn create_order(&self, order: &OrderRecord) -> Result<OrderRecord, sqlx::Error>;

    async fn find_order(&self, order: OrderUuid) -> Result<Option<OrderRecord>, sqlx::Error>;

    /// Orders of one user, newest first.
    async fn list_user_orders(&self, user: UserUuid) -> Result<Vec<OrderRecord>, sqlx::Error>;

    /// Every order, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, sqlx::Error>;

    /// Persist status, payment status, delivery estimate and tracking history.
    async fn save_progress(&self, order: &OrderRecord) -> Result<OrderRecord, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgOrdersRepository {
    pool: PgPool,
}

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrdersRepository for PgOrdersRepository {
    async fn create_order(&self, order: &OrderRecord) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user_uuid.into_uuid())
            .bind(Json(&order.products))
            .bind(to_i64(order.amount)?)
            .bind(&order.address)
            .bind(order.contact.phone.as_deref())
            .bind(order.contact.email.as_deref())
            .bind(order.status.as_str())
            .bind(order.payment_status.as_str())
            .bind(order.payment_mode.as_str())
            .bind(SqlxTimestamp::from(order.estimated_delivery))
            .bind(&order.tracking_number)
            .bind(&order.delivery_partner)
            .bind(Json(&order.tracking_details))
            .bind(SqlxTimestamp::from(order.created_at))
            .bind(SqlxTimestamp::from(order.updated_at))
            .fetch_one(&self.pool)
            .await
    }

    async fn find_order(&self, order: OrderUuid) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_user_orders(&self, user: UserUuid) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_USER_ORDERS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&self.pool)
            .await
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn save_progress(&self, order: &OrderRecord) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_PROGRESS_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.status.as_str())
            .bind(order.payment_status.as_str())
            .bind(SqlxTimestamp::from(order.estimated_delivery))
            .bind(Json(&order.tracking_details))
            .bind(SqlxTimestamp::from(order.updated_at))
            .fetch_one(&self.pool)
            .await
    }
}

fn try_get_parsed<T>(row: &PgRow, col: &str) -> Result<T, sqlx::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value: String = row.try_get(col)?;

    value.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(products) = row.try_get::<Json<Vec<OrderLine>>, _>("products")?;
        let Json(tracking_details) =
            row.try_get::<Json<Vec<TrackingEvent>>, _>("tracking_details")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            products,
            amount: try_get_u64(row, "amount")?,
            address: row.try_get("address")?,
            contact: ContactDetails {
                phone: row.try_get("contact_phone")?,
                email: row.try_get("contact_email")?,
            },
            status: try_get_parsed(row, "status")?,
            payment_status: try_get_parsed(row, "payment_status")?,
            payment_mode: try_get_parsed(row, "payment_mode")?,
            estimated_delivery: try_get_timestamp(row, "estimated_delivery")?,
            tracking_number: row.try_get("tracking_number")?,
            delivery_partner: row.try_get("delivery_partner")?,
            tracking_details,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
