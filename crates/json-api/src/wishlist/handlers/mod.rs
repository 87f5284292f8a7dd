//! Wishlist Handlers

pub(crate) mod add;
pub(crate) mod check;
pub(crate) mod index;
pub(crate) mod remove;
