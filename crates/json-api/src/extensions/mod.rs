//! Extension traits

mod depot;
mod ids;
mod response;

pub(crate) use depot::DepotExt as _;
pub(crate) use ids::IdExt as _;
pub(crate) use response::ResponseExt as _;
