//! Persistence layer for the catalog: entity models, the generic repository
//! and unit-of-work pattern, and the PostgreSQL / in-memory store backends.

use sqlx::postgres::PgPoolOptions;

pub mod entity;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;
pub mod unit_of_work;

pub use error::{DbError, DbResult};
pub use store::{memory::MemoryCatalogStore, postgres::PgCatalogStore, CatalogStats, CatalogStore};
pub use unit_of_work::{Committed, UnitOfWork};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
