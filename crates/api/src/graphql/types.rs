use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use catalog_core::types::{DbId, Timestamp};
use catalog_db::models::category::Category;
use catalog_db::models::product::Product;
use rust_decimal::Decimal;

use super::{store_error, GraphQLContext};

/// GraphQL representation of a category.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Categoria", complex)]
pub struct CategoryObject {
    #[graphql(name = "categoriaId")]
    pub id: DbId,
    #[graphql(name = "nome")]
    pub name: String,
    #[graphql(name = "imagemUrl")]
    pub image_url: String,
}

impl From<Category> for CategoryObject {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            image_url: category.image_url,
        }
    }
}

#[ComplexObject]
impl CategoryObject {
    /// Products of this category, loaded on demand.
    #[graphql(name = "produtos")]
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductObject>> {
        let context = ctx.data::<GraphQLContext>()?;
        let mut uow = context.unit_of_work();

        let products = uow
            .products()
            .get_by_category(self.id)
            .await
            .map_err(store_error)?;
        Ok(products.into_iter().map(ProductObject::from).collect())
    }
}

/// GraphQL representation of a product. Refers to its category by id only.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Produto")]
pub struct ProductObject {
    #[graphql(name = "produtoId")]
    pub id: DbId,
    #[graphql(name = "nome")]
    pub name: String,
    #[graphql(name = "descricao")]
    pub description: String,
    #[graphql(name = "preco")]
    pub price: Decimal,
    #[graphql(name = "imagemUrl")]
    pub image_url: String,
    #[graphql(name = "estoque")]
    pub stock: i32,
    #[graphql(name = "dataCadastro")]
    pub registered_at: Timestamp,
    #[graphql(name = "categoriaId")]
    pub category_id: DbId,
}

impl From<Product> for ProductObject {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            stock: product.stock,
            registered_at: product.registered_at,
            category_id: product.category_id,
        }
    }
}
