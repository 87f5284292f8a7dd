//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    auth::Identity,
    database::MAX_BIGINT,
    domain::products::{
        data::{NewProduct, ProductDetails, ProductFilter, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::{PgProductsRepository, ProductsRepository},
    },
};

#[derive(Clone)]
pub struct PgProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl PgProductsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgProductsRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

fn validate(details: &ProductDetails) -> Result<(), ProductsServiceError> {
    if details.name.trim().is_empty() {
        return Err(ProductsServiceError::InvalidArgument(
            "product name must not be blank",
        ));
    }

    if details.price > MAX_BIGINT {
        return Err(ProductsServiceError::InvalidArgument("product price is too large"));
    }

    if details.count_in_stock > MAX_BIGINT {
        return Err(ProductsServiceError::InvalidArgument(
            "product stock count is too large",
        ));
    }

    Ok(())
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self
            .repository
            .list_products(&filter.normalised())
            .await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .find_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        caller: &Identity,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        caller.ensure_admin()?;
        validate(&product.details)?;

        let created = self.repository.create_product(product).await?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        caller: &Identity,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        caller.ensure_admin()?;
        validate(&update.details)?;

        self.repository
            .update_product(product, update)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn delete_product(
        &self,
        caller: &Identity,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError> {
        caller.ensure_admin()?;

        let rows_affected = self.repository.delete_product(product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        info!(product_uuid = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves products matching the filter.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product. Admin only.
    async fn create_product(
        &self,
        caller: &Identity,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces the editable fields of a product. Admin only.
    async fn update_product(
        &self,
        caller: &Identity,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product along with its reviews and wishlist entries. Admin only.
    async fn delete_product(
        &self,
        caller: &Identity,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError>;
}
