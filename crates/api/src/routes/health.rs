//! Anonymous service health endpoint.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use catalog_db::CatalogStats;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the catalog store answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Catalog size; absent when the store is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogSummary>,
}

#[derive(Serialize)]
pub struct CatalogSummary {
    pub categorias: i64,
    pub produtos: i64,
}

impl From<CatalogStats> for CatalogSummary {
    fn from(stats: CatalogStats) -> Self {
        Self {
            categorias: stats.categories,
            produtos: stats.products,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = match state.store.stats().await {
        Ok(stats) => Some(CatalogSummary::from(stats)),
        Err(err) => {
            tracing::warn!(error = %err, "Catalog store unreachable");
            None
        }
    };

    Json(HealthResponse {
        status: if catalog.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: catalog.is_some(),
        catalog,
    })
}

/// `GET /health`, mounted at the root next to `/graphql`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
