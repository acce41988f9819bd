//! In-memory catalog store for development and testing.
//!
//! Mirrors the PostgreSQL schema rules that the API relies on: generated
//! ids, the product -> category foreign key, and cascading category deletes.
//! A commit is applied to a copy of the tables and swapped in only when every
//! change succeeded.

use std::collections::BTreeMap;

use async_trait::async_trait;
use catalog_core::pagination::{PageParams, PagedList};
use catalog_core::types::DbId;
use tokio::sync::RwLock;

use super::postgres::group_products;
use super::{CatalogStats, CatalogStore, EntityStore};
use crate::entity::{Change, StagedChange};
use crate::error::{DbError, DbResult};
use crate::models::category::{Category, CategoryWithProducts};
use crate::models::product::Product;

#[derive(Debug, Clone, Default)]
struct Tables {
    categories: BTreeMap<DbId, Category>,
    products: BTreeMap<DbId, Product>,
    last_category_id: DbId,
    last_product_id: DbId,
}

impl Tables {
    fn apply_category(&mut self, change: Change<Category>) -> DbResult<Change<Category>> {
        match change {
            Change::Add(mut category) => {
                self.last_category_id += 1;
                category.id = self.last_category_id;
                self.categories.insert(category.id, category.clone());
                Ok(Change::Add(category))
            }
            Change::Update(category) => {
                let slot = self
                    .categories
                    .get_mut(&category.id)
                    .ok_or(DbError::MissingRow {
                        entity: "Category",
                        id: category.id,
                    })?;
                *slot = category.clone();
                Ok(Change::Update(category))
            }
            Change::Delete(category) => {
                if self.categories.remove(&category.id).is_none() {
                    return Err(DbError::MissingRow {
                        entity: "Category",
                        id: category.id,
                    });
                }
                // ON DELETE CASCADE
                self.products.retain(|_, p| p.category_id != category.id);
                Ok(Change::Delete(category))
            }
        }
    }

    fn apply_product(&mut self, change: Change<Product>) -> DbResult<Change<Product>> {
        match change {
            Change::Add(mut product) => {
                self.check_category(product.category_id)?;
                self.last_product_id += 1;
                product.id = self.last_product_id;
                self.products.insert(product.id, product.clone());
                Ok(Change::Add(product))
            }
            Change::Update(product) => {
                self.check_category(product.category_id)?;
                let slot = self
                    .products
                    .get_mut(&product.id)
                    .ok_or(DbError::MissingRow {
                        entity: "Product",
                        id: product.id,
                    })?;
                *slot = product.clone();
                Ok(Change::Update(product))
            }
            Change::Delete(product) => {
                if self.products.remove(&product.id).is_none() {
                    return Err(DbError::MissingRow {
                        entity: "Product",
                        id: product.id,
                    });
                }
                Ok(Change::Delete(product))
            }
        }
    }

    fn check_category(&self, category_id: DbId) -> DbResult<()> {
        if self.categories.contains_key(&category_id) {
            Ok(())
        } else {
            Err(DbError::ForeignKey {
                entity: "Category",
                id: category_id,
            })
        }
    }
}

/// Process-local catalog backed by ordered maps.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore<Category> for MemoryCatalogStore {
    async fn fetch_all(&self) -> DbResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn fetch_page(&self, params: &PageParams) -> DbResult<PagedList<Category>> {
        let all = EntityStore::<Category>::fetch_all(self).await?;
        Ok(PagedList::paginate(all, params))
    }

    async fn fetch_by_id(&self, id: DbId) -> DbResult<Option<Category>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }
}

#[async_trait]
impl EntityStore<Product> for MemoryCatalogStore {
    async fn fetch_all(&self) -> DbResult<Vec<Product>> {
        Ok(self.tables.read().await.products.values().cloned().collect())
    }

    async fn fetch_page(&self, params: &PageParams) -> DbResult<PagedList<Product>> {
        let all = EntityStore::<Product>::fetch_all(self).await?;
        Ok(PagedList::paginate(all, params))
    }

    async fn fetch_by_id(&self, id: DbId) -> DbResult<Option<Product>> {
        Ok(self.tables.read().await.products.get(&id).cloned())
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn categories_with_products(&self) -> DbResult<Vec<CategoryWithProducts>> {
        let tables = self.tables.read().await;
        Ok(group_products(
            tables.categories.values().cloned().collect(),
            tables.products.values().cloned().collect(),
        ))
    }

    async fn products_by_category(&self, category_id: DbId) -> DbResult<Vec<Product>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn products_by_price(&self) -> DbResult<Vec<Product>> {
        let mut products = EntityStore::<Product>::fetch_all(self).await?;
        products.sort_by(|a, b| a.price.cmp(&b.price).then(a.id.cmp(&b.id)));
        Ok(products)
    }

    async fn apply(&self, changes: Vec<StagedChange>) -> DbResult<Vec<StagedChange>> {
        let mut guard = self.tables.write().await;
        let mut draft = guard.clone();
        let mut applied = Vec::with_capacity(changes.len());

        for change in changes {
            let done = match change {
                StagedChange::Category(c) => StagedChange::Category(draft.apply_category(c)?),
                StagedChange::Product(c) => StagedChange::Product(draft.apply_product(c)?),
            };
            applied.push(done);
        }

        *guard = draft;
        tracing::debug!(count = applied.len(), "Committed staged changes in memory");
        Ok(applied)
    }

    async fn stats(&self) -> DbResult<CatalogStats> {
        let tables = self.tables.read().await;
        Ok(CatalogStats {
            categories: tables.categories.len() as i64,
            products: tables.products.len() as i64,
        })
    }
}
