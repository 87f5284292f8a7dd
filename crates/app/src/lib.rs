//! Storefront domain services and persistence shared by the API server and the CLI.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod uuids;

#[cfg(test)]
mod test;
