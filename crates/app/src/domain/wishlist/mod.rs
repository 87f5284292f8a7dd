//! Wishlist

pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::WishlistServiceError;
pub use service::*;
