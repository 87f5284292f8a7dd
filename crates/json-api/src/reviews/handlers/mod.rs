//! Review Handlers

pub(crate) mod count;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod rating;
pub(crate) mod update;
