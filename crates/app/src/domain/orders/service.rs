//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rand::Rng;
use sqlx::PgPool;
use tracing::info;

use crate::{
    auth::{Identity, UserUuid},
    database::MAX_BIGINT,
    domain::orders::{
        data::{NewOrder, StatusUpdate},
        errors::OrdersServiceError,
        records::{OrderRecord, OrderTracking, OrderUuid},
        repository::{OrdersRepository, PgOrdersRepository},
    },
};

/// Prefix of every generated tracking number.
pub const TRACKING_NUMBER_PREFIX: &str = "TRK";

/// Generate a tracking number of the form `TRK` followed by six digits.
#[must_use]
pub fn generate_tracking_number() -> String {
    let digits: u32 = rand::thread_rng().gen_range(100_000..1_000_000);

    format!("{TRACKING_NUMBER_PREFIX}{digits}")
}

#[derive(Clone)]
pub struct PgOrdersService {
    repository: Arc<dyn OrdersRepository>,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgOrdersRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn OrdersRepository>) -> Self {
        Self { repository }
    }

    async fn find_visible_order(
        &self,
        caller: &Identity,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let order = self
            .repository
            .find_order(order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        caller.ensure_can_act_for(order.user_uuid)?;

        Ok(order)
    }
}

fn validate(order: &NewOrder) -> Result<(), OrdersServiceError> {
    if order.products.is_empty() {
        return Err(OrdersServiceError::InvalidArgument(
            "order must contain at least one product",
        ));
    }

    if order.products.iter().any(|line| line.quantity == 0) {
        return Err(OrdersServiceError::InvalidArgument(
            "product quantities must be at least 1",
        ));
    }

    if order.address.trim().is_empty() {
        return Err(OrdersServiceError::InvalidArgument(
            "delivery address must not be blank",
        ));
    }

    if order.amount == 0 {
        return Err(OrdersServiceError::InvalidArgument(
            "order amount must be positive",
        ));
    }

    if order.amount > MAX_BIGINT || order.products.iter().any(|line| line.price > MAX_BIGINT) {
        return Err(OrdersServiceError::InvalidArgument(
            "order amount and prices must fit in 63 bits",
        ));
    }

    Ok(())
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(
        &self,
        caller: &Identity,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError> {
        caller.ensure_is(order.user_uuid)?;
        validate(&order)?;

        let placed = OrderRecord::place(
            OrderUuid::new(),
            order,
            generate_tracking_number(),
            Timestamp::now(),
        );

        let created = self.repository.create_order(&placed).await?;

        info!(
            order_uuid = %created.uuid,
            user_uuid = %created.user_uuid,
            amount = created.amount,
            payment_mode = %created.payment_mode,
            "placed order"
        );

        Ok(created)
    }

    async fn list_user_orders(
        &self,
        caller: &Identity,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        caller.ensure_can_act_for(user)?;

        let orders = self.repository.list_user_orders(user).await?;

        Ok(orders)
    }

    async fn get_order(
        &self,
        caller: &Identity,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        self.find_visible_order(caller, order).await
    }

    async fn cancel_order(
        &self,
        caller: &Identity,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut order = self.find_visible_order(caller, order).await?;

        order.cancel(Timestamp::now())?;

        let saved = self.repository.save_progress(&order).await?;

        info!(order_uuid = %saved.uuid, "cancelled order");

        Ok(saved)
    }

    async fn update_status(
        &self,
        caller: &Identity,
        order: OrderUuid,
        update: StatusUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        caller.ensure_admin()?;

        let mut order = self
            .repository
            .find_order(order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let from = order.status;

        order.apply_status(update, Timestamp::now());

        let saved = self.repository.save_progress(&order).await?;

        info!(
            order_uuid = %saved.uuid,
            from = %from,
            to = %saved.status,
            "updated order status"
        );

        Ok(saved)
    }

    async fn track_order(
        &self,
        caller: &Identity,
        order: OrderUuid,
    ) -> Result<OrderTracking, OrdersServiceError> {
        Ok(self.find_visible_order(caller, order).await?.tracking())
    }

    async fn list_all_orders(
        &self,
        caller: &Identity,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        caller.ensure_admin()?;

        let orders = self.repository.list_orders().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place an order on behalf of the caller.
    async fn place_order(
        &self,
        caller: &Identity,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Orders of a user, newest first.
    async fn list_user_orders(
        &self,
        caller: &Identity,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(
        &self,
        caller: &Identity,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Cancel an order that has not been delivered.
    async fn cancel_order(
        &self,
        caller: &Identity,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Move an order to any status. Admin only.
    async fn update_status(
        &self,
        caller: &Identity,
        order: OrderUuid,
        update: StatusUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Tracking view of an order.
    async fn track_order(
        &self,
        caller: &Identity,
        order: OrderUuid,
    ) -> Result<OrderTracking, OrdersServiceError>;

    /// Every order in the store, newest first. Admin only.
    async fn list_all_orders(
        &self,
        caller: &Identity,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;
}
