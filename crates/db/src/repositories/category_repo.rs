//! Category-specific queries.

use super::CategoryRepository;
use crate::error::DbResult;
use crate::models::category::CategoryWithProducts;

impl CategoryRepository<'_> {
    /// Every category with its products eagerly loaded, ordered by id.
    pub async fn get_with_products(&self) -> DbResult<Vec<CategoryWithProducts>> {
        self.store.categories_with_products().await
    }
}
