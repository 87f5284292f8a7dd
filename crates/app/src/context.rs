//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::{AuthService, JwtAuthService},
    database,
    domain::{
        carts::{CartsService, PgCartsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        reviews::{PgReviewsService, ReviewsService},
        wishlist::{PgWishlistService, WishlistService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub wishlist: Arc<dyn WishlistService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Connect to the database, apply pending migrations and build every service.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection or a migration fails.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
        jwt_secret: &str,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self {
            products: Arc::new(PgProductsService::new(pool.clone())),
            carts: Arc::new(PgCartsService::new(pool.clone())),
            orders: Arc::new(PgOrdersService::new(pool.clone())),
            reviews: Arc::new(PgReviewsService::new(pool.clone())),
            wishlist: Arc::new(PgWishlistService::new(pool)),
            auth: Arc::new(JwtAuthService::new(jwt_secret)),
        })
    }
}
