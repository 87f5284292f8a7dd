//! Wishlist Records

use jiff::Timestamp;

use crate::{
    auth::UserUuid,
    domain::products::records::{ProductRecord, ProductUuid},
    uuids::TypedUuid,
};

/// Wishlist Item UUID
pub type WishlistItemUuid = TypedUuid<WishlistItemRecord>;

/// Membership of a product in a user's wishlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistItemRecord {
    pub uuid: WishlistItemUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub created_at: Timestamp,
}

/// A wishlist item joined with the live product.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub item: WishlistItemRecord,
    pub product: ProductRecord,
}
