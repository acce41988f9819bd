//! Product-specific queries.

use catalog_core::types::DbId;

use super::ProductRepository;
use crate::error::DbResult;
use crate::models::product::Product;

impl ProductRepository<'_> {
    /// Products ordered from cheapest to most expensive.
    pub async fn get_by_lowest_price(&self) -> DbResult<Vec<Product>> {
        self.store.products_by_price().await
    }

    /// Products owned by `category_id`, ordered by id.
    pub async fn get_by_category(&self, category_id: DbId) -> DbResult<Vec<Product>> {
        self.store.products_by_category(category_id).await
    }
}
