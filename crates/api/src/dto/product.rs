use catalog_core::types::{DbId, Timestamp};
use catalog_db::models::product::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Wire representation of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDto {
    #[serde(rename = "produtoId", default)]
    pub id: DbId,

    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 80))]
    pub name: String,

    #[serde(rename = "descricao")]
    #[validate(length(min = 1, max = 300))]
    pub description: String,

    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[serde(rename = "imagemUrl")]
    #[validate(length(min = 1, max = 300))]
    pub image_url: String,

    #[serde(rename = "estoque", default)]
    #[validate(range(min = 0))]
    pub stock: i32,

    /// Registration date; the server stamps the current time when absent.
    #[serde(rename = "dataCadastro", default)]
    pub registered_at: Option<Timestamp>,

    #[serde(rename = "categoriaId")]
    #[validate(range(min = 1))]
    pub category_id: DbId,
}

/// Upper bound of a `NUMERIC(10, 2)` column.
const MAX_PRICE_CENTS: i64 = 99_999_999_99;
/// Decimal places stored by a `NUMERIC(10, 2)` column.
const PRICE_SCALE: u32 = 2;

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() || *price > Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE) {
        return Err(ValidationError::new("price_out_of_range"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("price_too_many_decimals"));
    }
    Ok(())
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            stock: product.stock,
            registered_at: Some(product.registered_at),
            category_id: product.category_id,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            image_url: dto.image_url,
            stock: dto.stock,
            registered_at: dto.registered_at.unwrap_or_else(chrono::Utc::now),
            category_id: dto.category_id,
        }
    }
}
