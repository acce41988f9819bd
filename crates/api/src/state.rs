use std::sync::Arc;

use catalog_db::{CatalogStore, UnitOfWork};

use crate::config::ServerConfig;
use crate::graphql::{build_schema, CatalogSchema};
use crate::services::greeter::{Greeter, WelcomeGreeter};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog backend shared by REST and GraphQL.
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Greeting service for the diagnostic endpoint.
    pub greeter: Arc<dyn Greeter>,
    /// GraphQL schema resolving against `store`.
    pub schema: CatalogSchema,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, config: ServerConfig) -> Self {
        Self {
            schema: build_schema(Arc::clone(&store)),
            store,
            config: Arc::new(config),
            greeter: Arc::new(WelcomeGreeter),
        }
    }

    /// A fresh unit of work for one request.
    pub fn unit_of_work(&self) -> UnitOfWork {
        UnitOfWork::new(Arc::clone(&self.store))
    }
}
