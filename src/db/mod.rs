//! Database connection pool module.
//!
//! Provides async PostgreSQL connection pooling using diesel_async with bb8,
//! plus the embedded migrations for both service databases.

mod migrate;
mod pool;

pub use migrate::{CMS_MIGRATIONS, STORE_MIGRATIONS};
pub use pool::{AsyncDbPool, establish_async_connection_pool};
