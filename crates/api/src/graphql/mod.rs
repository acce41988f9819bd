//! GraphQL surface: a read-only query type over the same unit of work the
//! REST handlers use.

pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use catalog_db::{CatalogStore, DbError, UnitOfWork};

use query::CatalogQuery;

/// The complete GraphQL schema.
pub type CatalogSchema = Schema<CatalogQuery, EmptyMutation, EmptySubscription>;

/// Data attached to every GraphQL request.
pub struct GraphQLContext {
    pub store: Arc<dyn CatalogStore>,
}

impl GraphQLContext {
    pub fn unit_of_work(&self) -> UnitOfWork {
        UnitOfWork::new(Arc::clone(&self.store))
    }
}

/// Create the schema resolving against `store`.
pub fn build_schema(store: Arc<dyn CatalogStore>) -> CatalogSchema {
    Schema::build(CatalogQuery, EmptyMutation, EmptySubscription)
        .data(GraphQLContext { store })
        .finish()
}

/// Log a store failure and hide its details from the client.
pub(crate) fn store_error(err: DbError) -> async_graphql::Error {
    tracing::error!(error = %err, "GraphQL resolver failed");
    async_graphql::Error::new("An internal error occurred")
}
