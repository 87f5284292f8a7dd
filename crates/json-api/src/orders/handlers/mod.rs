//! Order Handlers

pub(crate) mod cancel;
pub(crate) mod get;
pub(crate) mod list_all;
pub(crate) mod list_user;
pub(crate) mod place;
pub(crate) mod track;
pub(crate) mod update_status;
