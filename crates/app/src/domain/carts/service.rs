//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    auth::{Identity, UserUuid},
    domain::{
        carts::{
            errors::CartsServiceError,
            records::{CartRecord, ClearOutcome, ClearedCart, Quantity},
            repository::{CartsRepository, PgCartsRepository},
        },
        products::{
            records::ProductUuid,
            repository::{PgProductsRepository, ProductsRepository},
        },
    },
};

#[derive(Clone)]
pub struct PgCartsService {
    carts: Arc<dyn CartsRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl PgCartsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repositories(
            Arc::new(PgCartsRepository::new(pool.clone())),
            Arc::new(PgProductsRepository::new(pool)),
        )
    }

    #[must_use]
    pub(crate) fn with_repositories(
        carts: Arc<dyn CartsRepository>,
        products: Arc<dyn ProductsRepository>,
    ) -> Self {
        Self { carts, products }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_item(
        &self,
        caller: &Identity,
        user: UserUuid,
        product: ProductUuid,
        quantity: Quantity,
    ) -> Result<CartRecord, CartsServiceError> {
        caller.ensure_can_act_for(user)?;

        let product = self
            .products
            .find_product(product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let mut cart = self
            .carts
            .find_cart(user)
            .await?
            .unwrap_or_else(|| CartRecord::empty(user));

        cart.set_entry(&product, quantity);

        let saved = self.carts.save_cart(&cart).await?;

        info!(
            user_uuid = %user,
            product_uuid = %product.uuid,
            quantity = quantity.get(),
            "set cart item quantity"
        );

        Ok(saved)
    }

    async fn get_cart(
        &self,
        caller: &Identity,
        user: UserUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        caller.ensure_can_act_for(user)?;

        let cart = self
            .carts
            .find_cart(user)
            .await?
            .unwrap_or_else(|| CartRecord::empty(user));

        Ok(cart)
    }

    async fn remove_item(
        &self,
        caller: &Identity,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        caller.ensure_can_act_for(user)?;

        let mut cart = self
            .carts
            .find_cart(user)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        if !cart.remove_entry(product) {
            debug!(user_uuid = %user, product_uuid = %product, "product not in cart");

            return Ok(cart);
        }

        let saved = self.carts.save_cart(&cart).await?;

        info!(user_uuid = %user, product_uuid = %product, "removed cart item");

        Ok(saved)
    }

    async fn clear_cart(
        &self,
        caller: &Identity,
        user: UserUuid,
    ) -> Result<ClearedCart, CartsServiceError> {
        caller.ensure_can_act_for(user)?;

        let Some(mut cart) = self.carts.find_cart(user).await? else {
            return Ok(ClearedCart {
                cart: CartRecord::empty(user),
                outcome: ClearOutcome::AlreadyEmpty,
            });
        };

        cart.clear();

        let cart = self.carts.save_cart(&cart).await?;

        info!(user_uuid = %user, "cleared cart");

        Ok(ClearedCart {
            cart,
            outcome: ClearOutcome::Cleared,
        })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Set the quantity of a product in a user's cart, creating the cart on first use.
    async fn add_item(
        &self,
        caller: &Identity,
        user: UserUuid,
        product: ProductUuid,
        quantity: Quantity,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Retrieve a user's cart. Users without a stored cart get an empty one.
    async fn get_cart(
        &self,
        caller: &Identity,
        user: UserUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove a product from a user's cart.
    async fn remove_item(
        &self,
        caller: &Identity,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Empty a user's cart, keeping the cart itself.
    async fn clear_cart(
        &self,
        caller: &Identity,
        user: UserUuid,
    ) -> Result<ClearedCart, CartsServiceError>;
}
