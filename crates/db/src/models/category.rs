//! Category entity (`categorias` table).

use catalog_core::types::DbId;
use sqlx::FromRow;

use super::product::Product;

/// A row from the `categorias` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
}

impl Category {
    /// A category that has not been persisted yet. The id is assigned on commit.
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

/// A category together with its eagerly loaded products.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithProducts {
    pub category: Category,
    pub products: Vec<Product>,
}
