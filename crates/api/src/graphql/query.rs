use async_graphql::{Context, Object, Result};
use catalog_db::repositories::Repository;

use super::types::CategoryObject;
use super::{store_error, GraphQLContext};

/// Root query object.
pub struct CatalogQuery;

#[Object]
impl CatalogQuery {
    /// A single category, or null when the id does not exist.
    #[graphql(name = "categoria")]
    async fn category(&self, ctx: &Context<'_>, id: i32) -> Result<Option<CategoryObject>> {
        let context = ctx.data::<GraphQLContext>()?;
        let mut uow = context.unit_of_work();

        let category = uow
            .categories()
            .get_by_id(id)
            .await
            .map_err(store_error)?;
        Ok(category.map(CategoryObject::from))
    }

    /// Every category, ordered by id.
    #[graphql(name = "categorias")]
    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<CategoryObject>> {
        let context = ctx.data::<GraphQLContext>()?;
        let mut uow = context.unit_of_work();

        let categories = uow.categories().get_all().await.map_err(store_error)?;
        Ok(categories.into_iter().map(CategoryObject::from).collect())
    }
}
