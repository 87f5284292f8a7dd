//! Wishlist Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::wishlist::WishlistServiceError;

pub(crate) fn into_status_error(error: WishlistServiceError) -> StatusError {
    match error {
        WishlistServiceError::NotFound => {
            StatusError::not_found().brief("Product not found in wishlist")
        }
        WishlistServiceError::ProductNotFound => {
            StatusError::not_found().brief("Product not found")
        }
        WishlistServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already in wishlist")
        }
        WishlistServiceError::Sql(source) => {
            error!("wishlist storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
