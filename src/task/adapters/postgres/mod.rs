//! `PostgreSQL` adapters for task persistence.

mod models;
mod schema;
mod store;

pub use store::{PostgresTaskStore, TaskPgPool};

#[cfg(test)]
pub(crate) use models::TaskRow;
#[cfg(test)]
pub(crate) use store::{StoreOp, row_to_task, to_upsert_row};
