//! Wishlist service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    auth::Identity,
    domain::{
        products::{
            records::ProductUuid,
            repository::{PgProductsRepository, ProductsRepository},
        },
        wishlist::{
            errors::WishlistServiceError,
            records::{WishlistEntry, WishlistItemUuid},
            repository::{PgWishlistRepository, WishlistRepository},
        },
    },
};

#[derive(Clone)]
pub struct PgWishlistService {
    wishlist: Arc<dyn WishlistRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl PgWishlistService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repositories(
            Arc::new(PgWishlistRepository::new(pool.clone())),
            Arc::new(PgProductsRepository::new(pool)),
        )
    }

    #[must_use]
    pub(crate) fn with_repositories(
        wishlist: Arc<dyn WishlistRepository>,
        products: Arc<dyn ProductsRepository>,
    ) -> Self {
        Self { wishlist, products }
    }
}

#[async_trait]
impl WishlistService for PgWishlistService {
    async fn list_wishlist(
        &self,
        caller: &Identity,
    ) -> Result<Vec<WishlistEntry>, WishlistServiceError> {
        let entries = self.wishlist.list_entries(caller.user).await?;

        Ok(entries)
    }

    async fn add_to_wishlist(
        &self,
        caller: &Identity,
        product: ProductUuid,
    ) -> Result<WishlistEntry, WishlistServiceError> {
        let product = self
            .products
            .find_product(product)
            .await?
            .ok_or(WishlistServiceError::ProductNotFound)?;

        if self
            .wishlist
            .find_item(caller.user, product.uuid)
            .await?
            .is_some()
        {
            return Err(WishlistServiceError::AlreadyExists);
        }

        let item = self
            .wishlist
            .create_item(WishlistItemUuid::new(), caller.user, product.uuid)
            .await?;

        info!(user_uuid = %caller.user, product_uuid = %product.uuid, "added to wishlist");

        Ok(WishlistEntry { item, product })
    }

    async fn remove_from_wishlist(
        &self,
        caller: &Identity,
        product: ProductUuid,
    ) -> Result<(), WishlistServiceError> {
        if self.wishlist.delete_item(caller.user, product).await? == 0 {
            return Err(WishlistServiceError::NotFound);
        }

        info!(user_uuid = %caller.user, product_uuid = %product, "removed from wishlist");

        Ok(())
    }

    async fn is_in_wishlist(
        &self,
        caller: &Identity,
        product: ProductUuid,
    ) -> Result<bool, WishlistServiceError> {
        Ok(self
            .wishlist
            .find_item(caller.user, product)
            .await?
            .is_some())
    }
}

/// The caller's own wishlist. There is no admin access to other users' wishlists.
#[automock]
#[async_trait]
pub trait WishlistService: Send + Sync {
    async fn list_wishlist(
        &self,
        caller: &Identity,
    ) -> Result<Vec<WishlistEntry>, WishlistServiceError>;

    async fn add_to_wishlist(
        &self,
        caller: &Identity,
        product: ProductUuid,
    ) -> Result<WishlistEntry, WishlistServiceError>;

    async fn remove_from_wishlist(
        &self,
        caller: &Identity,
        product: ProductUuid,
    ) -> Result<(), WishlistServiceError>;

    async fn is_in_wishlist(
        &self,
        caller: &Identity,
        product: ProductUuid,
    ) -> Result<bool, WishlistServiceError>;
}
