//! Product entity (`produtos` table).

use catalog_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row from the `produtos` table.
///
/// The owning category is referenced by id only.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub stock: i32,
    pub registered_at: Timestamp,
    pub category_id: DbId,
}
