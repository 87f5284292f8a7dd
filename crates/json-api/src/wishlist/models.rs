//! Wishlist request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::wishlist::records::WishlistEntry;

use crate::products::ProductResponse;

/// Wishlist Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WishlistItemResponse {
    pub id: Uuid,
    pub product_id: Uuid,

    /// When the product was added to the wishlist
    pub date_added: String,

    /// Current product details
    pub product: ProductResponse,
}

impl From<WishlistEntry> for WishlistItemResponse {
    fn from(entry: WishlistEntry) -> Self {
        Self {
            id: entry.item.uuid.into_uuid(),
            product_id: entry.item.product_uuid.into_uuid(),
            date_added: entry.item.created_at.to_string(),
            product: entry.product.into(),
        }
    }
}

/// Add To Wishlist Request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddToWishlistRequest {
    pub product_id: String,
}

/// Removed From Wishlist Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemovedResponse {
    pub message: String,
    pub product_id: Uuid,
}

/// Wishlist Membership Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckResponse {
    pub in_wishlist: bool,
}
