//! Store backends behind the unit of work.
//!
//! - [`postgres::PgCatalogStore`] -- production backend over a sqlx pool.
//! - [`memory::MemoryCatalogStore`] -- process-local backend for development and tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use catalog_core::pagination::{PageParams, PagedList};
use catalog_core::types::DbId;

use crate::entity::{Entity, StagedChange};
use crate::error::DbResult;
use crate::models::category::{Category, CategoryWithProducts};
use crate::models::product::Product;

/// Read access to one entity type. Results are ordered by id ascending.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    async fn fetch_all(&self) -> DbResult<Vec<E>>;

    async fn fetch_page(&self, params: &PageParams) -> DbResult<PagedList<E>>;

    async fn fetch_by_id(&self, id: DbId) -> DbResult<Option<E>>;
}

/// Full catalog backend: typed reads, catalog-specific queries, and atomic
/// application of staged changes.
#[async_trait]
pub trait CatalogStore: EntityStore<Category> + EntityStore<Product> {
    /// Every category with its products eagerly loaded.
    async fn categories_with_products(&self) -> DbResult<Vec<CategoryWithProducts>>;

    /// Products of one category, ordered by id.
    async fn products_by_category(&self, category_id: DbId) -> DbResult<Vec<Product>>;

    /// All products ordered by price ascending (ties by id).
    async fn products_by_price(&self) -> DbResult<Vec<Product>>;

    /// Apply `changes` in order, all or nothing.
    ///
    /// Returns the same changes with store-generated ids filled in for adds.
    async fn apply(&self, changes: Vec<StagedChange>) -> DbResult<Vec<StagedChange>>;

    /// Row counts of both tables. Doubles as the reachability check behind
    /// `GET /health`.
    async fn stats(&self) -> DbResult<CatalogStats>;
}

/// Size of the catalog as seen by one read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct CatalogStats {
    pub categories: i64,
    pub products: i64,
}
