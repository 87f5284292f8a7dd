//! Shared test infrastructure.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
pub(crate) use db::TestDb;
pub(crate) use memory::MemoryStore;
