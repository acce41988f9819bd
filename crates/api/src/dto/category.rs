use catalog_core::types::DbId;
use catalog_db::models::category::{Category, CategoryWithProducts};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::product::ProductDto;

/// Wire representation of a category.
///
/// `produtos` is present only on the eager-loading endpoint, where a category
/// without products carries an empty list. Elsewhere the key is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    #[serde(rename = "categoriaId", default)]
    pub id: DbId,

    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 80))]
    pub name: String,

    #[serde(rename = "imagemUrl")]
    #[validate(length(min = 1, max = 300))]
    pub image_url: String,

    #[serde(rename = "produtos", default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductDto>>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            image_url: category.image_url,
            products: None,
        }
    }
}

impl From<CategoryWithProducts> for CategoryDto {
    fn from(loaded: CategoryWithProducts) -> Self {
        Self {
            products: Some(loaded.products.into_iter().map(ProductDto::from).collect()),
            ..Self::from(loaded.category)
        }
    }
}

/// Nested products are not part of the category row and are dropped.
impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            image_url: dto.image_url,
        }
    }
}
